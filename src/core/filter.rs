// Sovereign Navigator - core/filter.rs
//
// Timeline filter for remedy events.
// Active filters are AND-combined; results are newest first.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Actor, RemedyEvent};
use serde::{Deserialize, Serialize};

/// Timeline filter state. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineFilter {
    /// Exact stage tag to keep.
    #[serde(default)]
    pub stage: Option<String>,

    /// Actor to keep.
    #[serde(default)]
    pub actor: Option<Actor>,
}

impl TimelineFilter {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.stage.is_none() && self.actor.is_none()
    }

    fn matches(&self, event: &RemedyEvent) -> bool {
        if let Some(ref stage) = self.stage {
            if &event.stage != stage {
                return false;
            }
        }
        if let Some(actor) = self.actor {
            if event.actor != actor {
                return false;
            }
        }
        true
    }
}

/// Apply the filter and sort by descending timestamp.
///
/// Events with equal timestamps keep their original relative order.
pub fn filter_and_sort<'a>(events: &'a [RemedyEvent], filter: &TimelineFilter) -> Vec<&'a RemedyEvent> {
    let mut matching: Vec<&RemedyEvent> = events.iter().filter(|e| filter.matches(e)).collect();
    matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_event(id: &str, hour: u32, actor: Actor, stage: &str) -> RemedyEvent {
        RemedyEvent {
            id: id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(),
            action: format!("action {id}"),
            actor,
            stage: stage.to_string(),
            document_url: None,
        }
    }

    fn ids(events: &[&RemedyEvent]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_all_newest_first() {
        let events = vec![
            make_event("a", 8, Actor::User, "notice"),
            make_event("b", 12, Actor::System, "rebuttal"),
            make_event("c", 10, Actor::User, "notice"),
        ];
        let result = filter_and_sort(&events, &TimelineFilter::default());
        assert_eq!(ids(&result), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_stage_filter_exact_match() {
        let events = vec![
            make_event("a", 8, Actor::User, "notice"),
            make_event("b", 9, Actor::User, "notices"),
            make_event("c", 10, Actor::System, "notice"),
        ];
        let filter = TimelineFilter {
            stage: Some("notice".to_string()),
            actor: None,
        };
        assert_eq!(ids(&filter_and_sort(&events, &filter)), vec!["c", "a"]);
    }

    #[test]
    fn test_stage_and_actor_combined() {
        let events = vec![
            make_event("a", 8, Actor::User, "notice"),
            make_event("b", 9, Actor::System, "notice"),
            make_event("c", 10, Actor::User, "rebuttal"),
            make_event("d", 11, Actor::User, "notice"),
        ];
        let filter = TimelineFilter {
            stage: Some("notice".to_string()),
            actor: Some(Actor::User),
        };
        assert_eq!(ids(&filter_and_sort(&events, &filter)), vec!["d", "a"]);
    }

    #[test]
    fn test_equal_timestamps_keep_original_order() {
        let events = vec![
            make_event("first", 9, Actor::User, "notice"),
            make_event("second", 9, Actor::User, "notice"),
            make_event("later", 10, Actor::User, "notice"),
        ];
        let result = filter_and_sort(&events, &TimelineFilter::default());
        assert_eq!(ids(&result), vec!["later", "first", "second"]);
    }

    #[test]
    fn test_no_matches() {
        let events = vec![make_event("a", 8, Actor::User, "notice")];
        let filter = TimelineFilter {
            stage: None,
            actor: Some(Actor::System),
        };
        assert!(filter_and_sort(&events, &filter).is_empty());
        assert!(!filter.is_empty());
    }
}

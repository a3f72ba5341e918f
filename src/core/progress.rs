// Sovereign Navigator - core/progress.rs
//
// Progress through the fixed four-stage remedy loop, derived from the
// stage tags present in the remedy log.

use crate::core::model::RemedyEvent;

/// One step of the remedy loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopStage {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// The remedy loop, in order.
pub const LOOP_STAGES: [LoopStage; 4] = [
    LoopStage {
        id: "notice",
        name: "Notice Sent",
        symbol: "\u{2709}",
    },
    LoopStage {
        id: "response",
        name: "Response Received",
        symbol: "\u{1f4ec}",
    },
    LoopStage {
        id: "rebuttal",
        name: "Rebuttal",
        symbol: "\u{1f6e1}",
    },
    LoopStage {
        id: "endorsement",
        name: "Endorsement",
        symbol: "\u{2705}",
    },
];

/// Rendering state of one loop stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageProgress {
    pub stage: LoopStage,
    pub completed: bool,
    pub active: bool,
}

/// Distinct stage tags in first-seen order.
pub fn completed_stages(events: &[RemedyEvent]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for event in events {
        if !seen.iter().any(|s| s == &event.stage) {
            seen.push(event.stage.clone());
        }
    }
    seen
}

fn is_completed(completed: &[String], id: &str) -> bool {
    completed.iter().any(|s| s == id)
}

/// Index of the first loop stage not yet completed.
/// When every stage is completed the last one stays active.
pub fn active_stage_index(completed: &[String]) -> usize {
    LOOP_STAGES
        .iter()
        .position(|stage| !is_completed(completed, stage.id))
        .unwrap_or(LOOP_STAGES.len() - 1)
}

/// Per-stage completed/active flags for the loop indicator.
pub fn stage_progress(completed: &[String]) -> Vec<StageProgress> {
    let active = active_stage_index(completed);
    LOOP_STAGES
        .iter()
        .enumerate()
        .map(|(index, stage)| StageProgress {
            stage: *stage,
            completed: is_completed(completed, stage.id),
            active: index == active,
        })
        .collect()
}

/// The stage "Simulate Next Stage" would log, or `None` once the loop is done.
pub fn next_stage_to_simulate(completed: &[String]) -> Option<LoopStage> {
    LOOP_STAGES
        .iter()
        .find(|stage| !is_completed(completed, stage.id))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Actor;
    use chrono::Utc;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn event(stage: &str) -> RemedyEvent {
        RemedyEvent {
            id: stage.to_string(),
            timestamp: Utc::now(),
            action: "x".to_string(),
            actor: Actor::System,
            stage: stage.to_string(),
            document_url: None,
        }
    }

    #[test]
    fn test_completed_stages_are_distinct_in_first_seen_order() {
        let events = vec![
            event("rebuttal"),
            event("notice"),
            event("rebuttal"),
            event("affidavit"),
        ];
        assert_eq!(
            completed_stages(&events),
            tags(&["rebuttal", "notice", "affidavit"])
        );
    }

    #[test]
    fn test_nothing_completed_first_stage_active() {
        assert_eq!(active_stage_index(&[]), 0);
        let progress = stage_progress(&[]);
        assert!(progress[0].active);
        assert!(progress.iter().all(|p| !p.completed));
    }

    #[test]
    fn test_first_gap_is_active_even_if_later_stages_done() {
        let completed = tags(&["notice", "rebuttal", "endorsement"]);
        assert_eq!(active_stage_index(&completed), 1);
        let progress = stage_progress(&completed);
        assert!(progress[0].completed && !progress[0].active);
        assert!(!progress[1].completed && progress[1].active);
        assert!(progress[2].completed);
        assert!(progress[3].completed);
    }

    #[test]
    fn test_all_completed_last_stage_stays_active() {
        let completed = tags(&["endorsement", "response", "notice", "rebuttal"]);
        assert_eq!(active_stage_index(&completed), LOOP_STAGES.len() - 1);
        assert_eq!(next_stage_to_simulate(&completed), None);
    }

    #[test]
    fn test_unrelated_tags_do_not_complete_loop_stages() {
        let completed = tags(&["affidavit", "violation", "notice"]);
        assert_eq!(active_stage_index(&completed), 1);
        assert_eq!(
            next_stage_to_simulate(&completed).map(|s| s.id),
            Some("response")
        );
    }
}

// Sovereign Navigator - core/suggestion.rs
//
// Normalises backend suggestions into the console's display shape and
// provides the category filter.

use crate::core::model::{Page, RawSuggestion, Suggestion, SuggestionKind};

/// Category filter value that shows every suggestion.
pub const ALL_CATEGORIES: &str = "All";

fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.is_empty())
}

fn kind_for(action_type: &str) -> SuggestionKind {
    if action_type.contains("endorse") || action_type.contains("overdue") {
        SuggestionKind::Overdue
    } else if action_type.contains("follow") {
        SuggestionKind::Unresponded
    } else if action_type.contains("insight") {
        SuggestionKind::Insight
    } else {
        SuggestionKind::Other
    }
}

fn page_for(action_type: &str) -> Option<Page> {
    match action_type {
        "send_notice" | "follow_up" => Some(Page::NoticeGenerator),
        "endorse_bill" | "endorse" => Some(Page::BillEndorsement),
        "open_dispatch" => Some(Page::DispatchTracker),
        _ => None,
    }
}

/// Convert one backend suggestion.
pub fn normalise(raw: &RawSuggestion) -> Suggestion {
    let action_type = raw.action_type().unwrap_or("");

    let category = first_non_empty(&[
        raw.title.as_deref(),
        raw.category.as_deref(),
        Some(action_type),
    ])
    .unwrap_or("Other")
    .to_string();

    let message = first_non_empty(&[
        raw.description.as_deref(),
        raw.message.as_deref(),
        raw.title.as_deref(),
    ])
    .unwrap_or("No description provided")
    .to_string();

    Suggestion {
        id: raw.id.clone(),
        kind: kind_for(action_type),
        category,
        message,
        action: page_for(action_type),
    }
}

pub fn normalise_all(raw: &[RawSuggestion]) -> Vec<Suggestion> {
    raw.iter().map(normalise).collect()
}

/// `"All"` followed by each distinct category in first-seen order.
pub fn categories(suggestions: &[Suggestion]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for s in suggestions {
        if !out.contains(&s.category) {
            out.push(s.category.clone());
        }
    }
    out
}

/// Suggestions shown under the given category filter.
pub fn visible<'a>(suggestions: &'a [Suggestion], filter: &str) -> Vec<&'a Suggestion> {
    suggestions
        .iter()
        .filter(|s| filter == ALL_CATEGORIES || s.category == filter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::SuggestionId;

    fn raw(action_type: Option<&str>) -> RawSuggestion {
        RawSuggestion {
            id: SuggestionId::Number(1),
            action_type: action_type.map(str::to_string),
            action_type_camel: None,
            title: None,
            category: None,
            description: None,
            message: None,
        }
    }

    #[test]
    fn test_kind_and_route_from_action_type() {
        let s = normalise(&raw(Some("endorse_bill")));
        assert_eq!(s.kind, SuggestionKind::Overdue);
        assert_eq!(s.action, Some(Page::BillEndorsement));

        let s = normalise(&raw(Some("follow_up")));
        assert_eq!(s.kind, SuggestionKind::Unresponded);
        assert_eq!(s.action, Some(Page::NoticeGenerator));

        let s = normalise(&raw(Some("send_notice")));
        assert_eq!(s.kind, SuggestionKind::Other);
        assert_eq!(s.action, Some(Page::NoticeGenerator));

        let s = normalise(&raw(Some("weekly_insight")));
        assert_eq!(s.kind, SuggestionKind::Insight);
        assert_eq!(s.action, None);

        let s = normalise(&raw(Some("open_dispatch")));
        assert_eq!(s.action, Some(Page::DispatchTracker));
    }

    #[test]
    fn test_camel_case_action_type_routes_when_snake_case_is_null() {
        let mut r = raw(None);
        r.action_type_camel = Some("endorse_bill".to_string());
        let s = normalise(&r);
        assert_eq!(s.kind, SuggestionKind::Overdue);
        assert_eq!(s.action, Some(Page::BillEndorsement));
        assert_eq!(s.category, "endorse_bill");
    }

    #[test]
    fn test_category_and_message_fallbacks() {
        let s = normalise(&raw(None));
        assert_eq!(s.category, "Other");
        assert_eq!(s.message, "No description provided");

        let s = normalise(&raw(Some("follow_up")));
        assert_eq!(s.category, "follow_up");

        let mut r = raw(Some("follow_up"));
        r.title = Some("Notices".to_string());
        r.category = Some("ignored".to_string());
        let s = normalise(&r);
        assert_eq!(s.category, "Notices");
        assert_eq!(s.message, "Notices");

        r.message = Some("No reply in 30 days".to_string());
        r.description = Some(String::new());
        assert_eq!(normalise(&r).message, "No reply in 30 days");
    }

    #[test]
    fn test_categories_and_visible() {
        let mut a = raw(None);
        a.category = Some("Bills".to_string());
        let mut b = raw(None);
        b.category = Some("Notices".to_string());
        let mut c = raw(None);
        c.category = Some("Bills".to_string());
        let list = normalise_all(&[a, b, c]);

        assert_eq!(categories(&list), vec!["All", "Bills", "Notices"]);
        assert_eq!(visible(&list, "All").len(), 3);
        assert_eq!(visible(&list, "Bills").len(), 2);
        assert!(visible(&list, "Affidavits").is_empty());
    }
}

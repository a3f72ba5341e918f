// Sovereign Navigator - tests/e2e_state.rs
//
// End-to-end tests for view flows: the state queues requests, `execute`
// runs them against a mock backend, and responses are fed back until the
// outbox drains. This is the same loop the GUI runs each frame, minus the
// background threads.

use httpmock::prelude::*;
use serde_json::json;
use sovereign_navigator::app::api::ApiClient;
use sovereign_navigator::app::requests::{execute, ApiRequest};
use sovereign_navigator::app::session;
use sovereign_navigator::app::state::AppState;
use sovereign_navigator::core::model::{Actor, DispatchStatus, Page, SuggestionId};
use std::time::Duration;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Run queued requests (and any follow-ups) to completion.
/// Returns every request executed, in order.
fn pump(state: &mut AppState, client: &ApiClient) -> Vec<ApiRequest> {
    let mut executed = Vec::new();
    for _ in 0..10 {
        let batch = state.take_requests();
        if batch.is_empty() {
            break;
        }
        for request in batch {
            executed.push(request.clone());
            let response = execute(client, request);
            state.handle_response(response);
        }
    }
    executed
}

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

// =============================================================================
// Creditor form
// =============================================================================

#[test]
fn e2e_creditor_submission_clears_form_and_refetches() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/creditors");
        then.status(201).json_body(json!({"id": "c3"}));
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/creditors");
        then.status(200).json_body(json!([
            {"id": "c3", "name": "Acme Bank", "address": "1 Main St",
             "contact_method": "mail", "tags": ["collector"]}
        ]));
    });

    let client = client(&server);
    let mut state = AppState::default();
    state.creditor_form.form.name = "Acme Bank".to_string();
    state.creditor_form.form.address = "1 Main St".to_string();
    state.creditor_form.form.tags = " collector, ".to_string();
    state.submit_creditor();

    let executed = pump(&mut state, &client);
    create.assert();
    list.assert();
    assert_eq!(executed.len(), 2);
    assert!(matches!(executed[1], ApiRequest::LoadCreditors));

    assert_eq!(
        state.creditor_form.success.as_deref(),
        Some("Creditor \"Acme Bank\" added successfully.")
    );
    assert!(state.creditor_form.form.name.is_empty());
    assert!(state.creditor_form.form.tags.is_empty());
    assert_eq!(state.creditors.creditors.len(), 1);
    assert!(!state.creditors.loading);
}

// =============================================================================
// Violations
// =============================================================================

#[test]
fn e2e_violation_submission_keeps_date_and_refetches() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/violations").json_body(json!({
            "date": "2024-05-01",
            "collector": "Collections LLC",
            "violation_type": "Called at work",
            "statute_reference": "15usc1692c",
            "notes": "Third call this week"
        }));
        then.status(201);
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/violations");
        then.status(200).json_body(json!([
            {"id": "v1", "date": "2024-05-01", "collector": "Collections LLC",
             "violation_type": "Called at work", "statute_reference": "15usc1692c",
             "notes": "Third call this week"}
        ]));
    });

    let client = client(&server);
    let mut state = AppState::default();
    state.violations.form.date = "2024-05-01".to_string();
    state.violations.form.collector = "Collections LLC".to_string();
    state.violations.form.violation_type = "Called at work".to_string();
    state.violations.form.statute_reference = "15usc1692c".to_string();
    state.violations.form.notes = "Third call this week".to_string();
    state.submit_violation();
    pump(&mut state, &client);

    list.assert();
    assert!(state.violations.error.is_none());
    assert_eq!(state.violations.violations.len(), 1);
    assert_eq!(state.violations.form.date, "2024-05-01");
    assert!(state.violations.form.collector.is_empty());
    assert!(state.violations.form.notes.is_empty());
}

#[test]
fn e2e_violation_missing_notes_is_rejected_locally() {
    let mut state = AppState::default();
    state.violations.form.collector = "Collections LLC".to_string();
    state.violations.form.violation_type = "Called at work".to_string();
    state.submit_violation();
    assert_eq!(state.violations.error.as_deref(), Some("Notes is required."));
    assert!(state.take_requests().is_empty());
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn e2e_dispatch_status_change_refetches_with_resolved_status() {
    let server = MockServer::start();
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/dispatch/d1/status")
            .json_body(json!({"status": "delivered"}));
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/dispatch");
        then.status(200).json_body(json!([
            {"id": "d1", "document_id": "n1", "document_type": "notice",
             "dispatch_method": "certified mail", "sent_at": "2024-05-01T12:00:00"}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/notices/n1");
        then.status(200).json_body(json!({"status": "delivered"}));
    });

    let client = client(&server);
    let mut state = AppState::default();
    state.change_dispatch_status("d1", DispatchStatus::Delivered);
    pump(&mut state, &client);

    update.assert();
    assert_eq!(state.dispatch.dispatches.len(), 1);
    assert_eq!(state.dispatch.dispatches[0].status_label(), "delivered");
}

// =============================================================================
// Remedy loop
// =============================================================================

#[test]
fn e2e_simulated_stage_advances_the_loop() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/remedy-log").json_body(json!({
            "action": "Simulated Notice Sent",
            "actor": "system",
            "stage": "notice"
        }));
        then.status(200).json_body(json!({
            "id": "e1", "timestamp": "2024-06-01T10:00:00",
            "action": "Simulated Notice Sent", "actor": "system", "stage": "notice"
        }));
    });

    let client = client(&server);
    let mut state = AppState::default();
    state.simulate_next_stage();
    pump(&mut state, &client);

    assert_eq!(state.completed_stages(), vec!["notice".to_string()]);
    assert_eq!(state.remedy_log.events[0].actor, Actor::System);
}

#[test]
fn e2e_timeline_filter_applies_to_loaded_log() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/remedy-log");
        then.status(200).json_body(json!([
            {"id": "e1", "timestamp": "2024-05-01T09:00:00", "action": "a",
             "actor": "user", "stage": "notice"},
            {"id": "e2", "timestamp": "2024-05-03T09:00:00", "action": "b",
             "actor": "system", "stage": "notice"},
            {"id": "e3", "timestamp": "2024-05-02T09:00:00", "action": "c",
             "actor": "user", "stage": "notice"},
            {"id": "e4", "timestamp": "2024-05-04T09:00:00", "action": "d",
             "actor": "user", "stage": "rebuttal"}
        ]));
    });

    let client = client(&server);
    let mut state = AppState::default();
    state.request(ApiRequest::LoadRemedyLog);
    pump(&mut state, &client);

    state.timeline_filter.stage = Some("notice".to_string());
    state.timeline_filter.actor = Some(Actor::User);
    let ids: Vec<&str> = state.filtered_events().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e3", "e1"]);
}

// =============================================================================
// Intelligence
// =============================================================================

#[test]
fn e2e_failed_dismissal_restores_suggestions() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/intelligence/suggestions");
        then.status(200).json_body(json!([
            {"id": 1, "action_type": "endorse_bill", "category": "Bills",
             "description": "Endorse the May statement"},
            {"id": 2, "action_type": "follow_up", "category": "Notices"}
        ]));
    });
    server.mock(|when, then| {
        when.method(httpmock::Method::PATCH)
            .path("/api/intelligence/suggestions/1/resolve");
        then.status(500);
    });

    let client = client(&server);
    let mut state = AppState::default();
    state.navigate(Page::IntelligenceConsole);
    pump(&mut state, &client);
    assert_eq!(state.intelligence.suggestions.len(), 2);

    state.dismiss_suggestion(&SuggestionId::Number(1));
    assert_eq!(state.intelligence.suggestions.len(), 1);

    let executed = pump(&mut state, &client);
    assert!(matches!(executed.last(), Some(ApiRequest::LoadSuggestions)));
    assert_eq!(
        state.intelligence.error.as_deref(),
        Some("Failed to dismiss suggestion")
    );
    assert_eq!(state.intelligence.suggestions.len(), 2);
    assert_eq!(state.visible_suggestions().len(), 2);

    // The next successful load clears the banner.
    state.navigate(Page::IntelligenceConsole);
    pump(&mut state, &client);
    assert!(state.intelligence.error.is_none());
    assert_eq!(state.intelligence.suggestions.len(), 2);
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn e2e_session_restores_page_and_filter() {
    let dir = TempDir::new().unwrap();
    let path = session::session_path(dir.path());

    let mut state = AppState::default();
    state.session_path = Some(path.clone());
    state.page = Page::BillEndorsement;
    state.timeline_filter.actor = Some(Actor::System);
    state.save_session();

    let mut restored = AppState::default();
    restored.apply_session(session::load(&path).unwrap());
    assert_eq!(restored.page, Page::BillEndorsement);
    assert_eq!(restored.timeline_filter.actor, Some(Actor::System));

    restored.start();
    let requests = restored.take_requests();
    assert_eq!(requests.last(), Some(&ApiRequest::LoadBills));
}

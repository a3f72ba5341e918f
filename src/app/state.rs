// Sovereign Navigator - app/state.rs
//
// Application state management. Holds per-view state, the shared remedy log
// and statute list, and an outbox of API requests for the UI to dispatch.
// Owned by the eframe::App implementation.
//
// Every view follows the same shape: on open, queue its load requests; store
// responses; on submit, queue a request and refetch once it succeeds.
// Failed requests set the view's error string, shown verbatim.

use crate::app::requests::{ApiRequest, ApiResponse};
use crate::app::session::{self, SessionData};
use crate::core::filter::{self, TimelineFilter};
use crate::core::forms::{self, CreditorForm, ViolationForm};
use crate::core::model::{
    Actor, Creditor, DispatchEvent, DispatchStatus, MonthlyBill, NewRemedyEvent, Page,
    RemedyEvent, Statute, Suggestion, SuggestionId, UserProfile, Violation,
};
use crate::core::progress;
use crate::core::suggestion::{self, ALL_CATEGORIES};
use crate::util::constants::{DEFAULT_USER_ID, EXPORTS_DIR_NAME};
use crate::util::error::FormError;
use std::path::PathBuf;

// =============================================================================
// Per-view state
// =============================================================================

/// Shared remedy log (timeline and stage loop).
#[derive(Debug, Default)]
pub struct RemedyLogState {
    pub events: Vec<RemedyEvent>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct StatuteState {
    pub statutes: Vec<Statute>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StatuteState {
    pub fn get(&self, id: &str) -> Option<&Statute> {
        self.statutes.iter().find(|s| s.id == id)
    }
}

/// Creditor list shared by the dashboard, notice generator and affidavit forge.
#[derive(Debug, Default)]
pub struct CreditorListState {
    pub creditors: Vec<Creditor>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CreditorListState {
    pub fn get(&self, id: &str) -> Option<&Creditor> {
        self.creditors.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Default)]
pub struct CreditorFormState {
    pub form: CreditorForm,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Debug, Default)]
pub struct NoticeState {
    pub templates: Vec<String>,
    pub selected_template: Option<String>,
    pub selected_creditor: Option<String>,
    pub notice_text: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct AffidavitState {
    pub selected_creditor: Option<String>,
    pub affidavit_text: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct BillsState {
    pub bills: Vec<MonthlyBill>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct DispatchState {
    pub dispatches: Vec<DispatchEvent>,
    pub affidavit_preview: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    /// Declarations as edited, one per line.
    pub declarations_text: String,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Debug, Default)]
pub struct ViolationState {
    pub violations: Vec<Violation>,
    pub form: ViolationForm,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct IntelligenceState {
    pub suggestions: Vec<Suggestion>,
    /// Selected category, or `ALL_CATEGORIES`.
    pub filter: String,
    pub loading: bool,
    pub error: Option<String>,
    /// A failed dismissal is being rolled back; its error survives the
    /// restoring reload.
    pub restoring: bool,
}

impl Default for IntelligenceState {
    fn default() -> Self {
        Self {
            suggestions: Vec::new(),
            filter: ALL_CATEGORIES.to_string(),
            loading: false,
            error: None,
            restoring: false,
        }
    }
}

// =============================================================================
// AppState
// =============================================================================

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Currently displayed view.
    pub page: Page,

    pub remedy_log: RemedyLogState,
    pub timeline_filter: TimelineFilter,
    pub statutes: StatuteState,
    pub creditors: CreditorListState,
    pub creditor_form: CreditorFormState,
    pub notices: NoticeState,
    pub affidavit: AffidavitState,
    pub bills: BillsState,
    pub dispatch: DispatchState,
    pub profile: ProfileState,
    pub violations: ViolationState,
    pub intelligence: IntelligenceState,

    /// User identifier sent with notice generation.
    pub user_id: String,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (config validation, export failures).
    pub warnings: Vec<String>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Where the session is persisted; `None` disables persistence.
    pub session_path: Option<PathBuf>,

    /// Directory for printable HTML documents.
    pub exports_dir: PathBuf,

    /// Requests queued for the UI to dispatch.
    outbox: Vec<ApiRequest>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID.to_string(), false)
    }
}

impl AppState {
    pub fn new(user_id: String, debug_mode: bool) -> Self {
        Self {
            page: Page::default(),
            remedy_log: RemedyLogState::default(),
            timeline_filter: TimelineFilter::default(),
            statutes: StatuteState::default(),
            creditors: CreditorListState::default(),
            creditor_form: CreditorFormState::default(),
            notices: NoticeState::default(),
            affidavit: AffidavitState::default(),
            bills: BillsState::default(),
            dispatch: DispatchState::default(),
            profile: ProfileState::default(),
            violations: ViolationState::default(),
            intelligence: IntelligenceState::default(),
            user_id,
            status_message: "Ready.".to_string(),
            warnings: Vec::new(),
            show_about: false,
            dark_mode: true,
            debug_mode,
            session_path: None,
            exports_dir: PathBuf::from(EXPORTS_DIR_NAME),
            outbox: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Outbox
    // -------------------------------------------------------------------------

    /// Queue a request and mark the owning view as loading.
    pub fn request(&mut self, request: ApiRequest) {
        match &request {
            ApiRequest::LoadCreditors => self.creditors.loading = true,
            ApiRequest::LoadRemedyLog => self.remedy_log.loading = true,
            ApiRequest::LoadStatutes => self.statutes.loading = true,
            ApiRequest::GenerateNotice { .. } => self.notices.loading = true,
            ApiRequest::LoadBills => self.bills.loading = true,
            ApiRequest::LoadDispatches => self.dispatch.loading = true,
            ApiRequest::LoadProfile => self.profile.loading = true,
            ApiRequest::GenerateAffidavit { .. } => self.affidavit.loading = true,
            ApiRequest::LoadViolations => self.violations.loading = true,
            ApiRequest::LoadSuggestions => self.intelligence.loading = true,
            _ => {}
        }
        self.outbox.push(request);
    }

    /// Take every queued request, leaving the outbox empty.
    pub fn take_requests(&mut self) -> Vec<ApiRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Requests issued once at startup: the shared providers plus the
    /// current page.
    pub fn start(&mut self) {
        self.request(ApiRequest::LoadRemedyLog);
        self.request(ApiRequest::LoadStatutes);
        self.navigate(self.page);
    }

    /// Switch to `page` and queue the requests it issues when opened.
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(page = page.label(), "Navigating");
        self.page = page;
        match page {
            Page::Dashboard | Page::AffidavitForge => self.request(ApiRequest::LoadCreditors),
            Page::BillEndorsement => self.request(ApiRequest::LoadBills),
            Page::ViolationTracker => self.request(ApiRequest::LoadViolations),
            Page::Profile => self.request(ApiRequest::LoadProfile),
            Page::NoticeGenerator => {
                self.request(ApiRequest::LoadNoticeTemplates);
                self.request(ApiRequest::LoadCreditors);
            }
            Page::DispatchTracker => self.request(ApiRequest::LoadDispatches),
            Page::IntelligenceConsole => self.request(ApiRequest::LoadSuggestions),
        }
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// Timeline events after the current filter, newest first.
    pub fn filtered_events(&self) -> Vec<&RemedyEvent> {
        filter::filter_and_sort(&self.remedy_log.events, &self.timeline_filter)
    }

    pub fn completed_stages(&self) -> Vec<String> {
        progress::completed_stages(&self.remedy_log.events)
    }

    pub fn visible_suggestions(&self) -> Vec<&Suggestion> {
        suggestion::visible(&self.intelligence.suggestions, &self.intelligence.filter)
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    pub fn submit_creditor(&mut self) {
        self.creditor_form.error = None;
        self.creditor_form.success = None;
        match self.creditor_form.form.validate() {
            Ok(body) => self.request(ApiRequest::CreateCreditor(body)),
            Err(e) => self.creditor_form.error = Some(e.to_string()),
        }
    }

    /// Log the first incomplete loop stage as a simulated system event.
    pub fn simulate_next_stage(&mut self) {
        let completed = self.completed_stages();
        if let Some(stage) = progress::next_stage_to_simulate(&completed) {
            self.request(ApiRequest::AddRemedyEvent(NewRemedyEvent {
                action: format!("Simulated {}", stage.name),
                actor: Actor::System,
                stage: stage.id.to_string(),
                document_url: None,
            }));
        }
    }

    pub fn generate_notice(&mut self) {
        let (Some(template_name), Some(creditor_id)) = (
            self.notices.selected_template.clone(),
            self.notices.selected_creditor.clone(),
        ) else {
            self.notices.error = Some(
                FormError::SelectionRequired {
                    what: "a template and a creditor",
                }
                .to_string(),
            );
            return;
        };
        self.notices.error = None;
        self.notices.notice_text.clear();
        self.request(ApiRequest::GenerateNotice {
            template_name,
            creditor_id,
            user_id: self.user_id.clone(),
        });
    }

    pub fn generate_affidavit(&mut self) {
        let creditor = self
            .affidavit
            .selected_creditor
            .as_deref()
            .and_then(|id| self.creditors.get(id))
            .cloned();
        let Some(creditor) = creditor else {
            self.affidavit.error = Some(
                FormError::SelectionRequired { what: "a creditor" }.to_string(),
            );
            return;
        };
        self.affidavit.error = None;
        self.affidavit.affidavit_text.clear();
        let events = self.remedy_log.events.clone();
        self.request(ApiRequest::GenerateAffidavit { creditor, events });
    }

    pub fn endorse_bill(&mut self, bill_id: &str) {
        self.request(ApiRequest::EndorseBill {
            bill_id: bill_id.to_string(),
        });
    }

    pub fn change_dispatch_status(&mut self, dispatch_id: &str, status: DispatchStatus) {
        self.request(ApiRequest::UpdateDispatchStatus {
            dispatch_id: dispatch_id.to_string(),
            status,
        });
    }

    pub fn generate_mailing_affidavit(&mut self, dispatch_id: &str) {
        self.request(ApiRequest::GenerateMailingAffidavit {
            dispatch_id: dispatch_id.to_string(),
        });
    }

    pub fn save_profile(&mut self) {
        let declarations = forms::declarations_from_text(&self.profile.declarations_text);
        let Some(profile) = self.profile.profile.as_mut() else {
            return;
        };
        profile.declarations = Some(declarations);
        let body = profile.clone();
        self.profile.error = None;
        self.profile.success = None;
        self.request(ApiRequest::SaveProfile(body));
    }

    pub fn submit_violation(&mut self) {
        match self.violations.form.validate() {
            Ok(body) => {
                self.violations.error = None;
                self.request(ApiRequest::LogViolation(body));
            }
            Err(e) => self.violations.error = Some(e.to_string()),
        }
    }

    /// Remove the suggestion immediately, then tell the backend.
    pub fn dismiss_suggestion(&mut self, id: &SuggestionId) {
        let Some(index) = self.intelligence.suggestions.iter().position(|s| &s.id == id) else {
            return;
        };
        let removed = self.intelligence.suggestions.remove(index);
        self.request(ApiRequest::DismissSuggestion {
            id: removed.id,
            category: removed.category,
        });
    }

    // -------------------------------------------------------------------------
    // Responses
    // -------------------------------------------------------------------------

    /// Store a finished request's result and queue any follow-up requests.
    pub fn handle_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Creditors(result) => {
                self.creditors.loading = false;
                match result {
                    Ok(list) => {
                        self.creditors.creditors = list;
                        self.creditors.error = None;
                    }
                    Err(e) => self.creditors.error = Some(e.user_message()),
                }
            }
            ApiResponse::CreditorCreated { name, result } => match result {
                Ok(()) => {
                    tracing::info!("Creditor added");
                    self.creditor_form.success =
                        Some(format!("Creditor \"{name}\" added successfully."));
                    self.creditor_form.form.clear();
                    self.request(ApiRequest::LoadCreditors);
                }
                Err(e) => self.creditor_form.error = Some(e.user_message()),
            },
            ApiResponse::RemedyLog(result) => {
                self.remedy_log.loading = false;
                match result {
                    Ok(events) => {
                        tracing::debug!(count = events.len(), "Remedy log loaded");
                        self.remedy_log.events = events;
                        self.remedy_log.error = None;
                    }
                    Err(e) => self.remedy_log.error = Some(e.user_message()),
                }
            }
            ApiResponse::RemedyEventAdded(result) => match result {
                Ok(event) => self.remedy_log.events.push(event),
                Err(e) => self.remedy_log.error = Some(e.user_message()),
            },
            ApiResponse::Statutes(result) => {
                self.statutes.loading = false;
                match result {
                    Ok(list) => {
                        self.statutes.statutes = list;
                        self.statutes.error = None;
                    }
                    Err(e) => self.statutes.error = Some(e.user_message()),
                }
            }
            ApiResponse::NoticeTemplates(result) => match result {
                Ok(list) => {
                    self.notices.templates = list;
                    self.notices.error = None;
                }
                Err(e) => self.notices.error = Some(e.user_message()),
            },
            ApiResponse::NoticeGenerated(result) => {
                self.notices.loading = false;
                match result {
                    Ok(text) => self.notices.notice_text = text,
                    Err(e) => self.notices.error = Some(e.user_message()),
                }
            }
            ApiResponse::Bills(result) => {
                self.bills.loading = false;
                match result {
                    Ok(list) => {
                        self.bills.bills = list;
                        self.bills.error = None;
                    }
                    Err(e) => self.bills.error = Some(e.user_message()),
                }
            }
            ApiResponse::BillEndorsed(result) => match result {
                Ok(()) => {
                    // The backend logs the endorsement; refresh the loop too.
                    self.request(ApiRequest::LoadBills);
                    self.request(ApiRequest::LoadRemedyLog);
                }
                Err(e) => self.bills.error = Some(e.user_message()),
            },
            ApiResponse::Dispatches(result) => {
                self.dispatch.loading = false;
                match result {
                    Ok(list) => {
                        self.dispatch.dispatches = list;
                        self.dispatch.error = None;
                    }
                    Err(e) => self.dispatch.error = Some(e.user_message()),
                }
            }
            ApiResponse::DispatchStatusUpdated(result) => match result {
                Ok(()) => self.request(ApiRequest::LoadDispatches),
                Err(e) => self.dispatch.error = Some(e.user_message()),
            },
            ApiResponse::MailingAffidavit(result) => match result {
                Ok(text) => self.dispatch.affidavit_preview = Some(text),
                Err(e) => self.dispatch.error = Some(e.user_message()),
            },
            ApiResponse::Profile(result) => {
                self.profile.loading = false;
                match result {
                    Ok(profile) => {
                        self.profile.declarations_text =
                            forms::declarations_to_text(profile.declarations.as_deref());
                        self.profile.profile = Some(profile);
                        self.profile.error = None;
                    }
                    Err(e) => self.profile.error = Some(e.user_message()),
                }
            }
            ApiResponse::ProfileSaved(result) => match result {
                Ok(()) => self.profile.success = Some("Profile saved successfully!".to_string()),
                Err(e) => self.profile.error = Some(e.user_message()),
            },
            ApiResponse::AffidavitGenerated {
                creditor_name,
                result,
            } => {
                self.affidavit.loading = false;
                match result {
                    Ok(text) => {
                        self.affidavit.affidavit_text = text;
                        self.request(ApiRequest::AddRemedyEvent(NewRemedyEvent {
                            action: format!("Affidavit generated for {creditor_name}"),
                            actor: Actor::User,
                            stage: "endorsement".to_string(),
                            document_url: None,
                        }));
                    }
                    Err(e) => self.affidavit.error = Some(e.user_message()),
                }
            }
            ApiResponse::Violations(result) => {
                self.violations.loading = false;
                match result {
                    Ok(list) => {
                        self.violations.violations = list;
                        self.violations.error = None;
                    }
                    Err(e) => self.violations.error = Some(e.user_message()),
                }
            }
            ApiResponse::ViolationLogged(result) => match result {
                Ok(()) => {
                    self.violations.form.clear();
                    self.request(ApiRequest::LoadViolations);
                }
                Err(e) => self.violations.error = Some(e.user_message()),
            },
            ApiResponse::Suggestions(result) => {
                self.intelligence.loading = false;
                match result {
                    Ok(raw) => {
                        self.intelligence.suggestions = suggestion::normalise_all(&raw);
                        if !std::mem::take(&mut self.intelligence.restoring) {
                            self.intelligence.error = None;
                        }
                        // Keep the filter meaningful if its category disappeared.
                        let categories = suggestion::categories(&self.intelligence.suggestions);
                        if !categories.contains(&self.intelligence.filter) {
                            self.intelligence.filter = ALL_CATEGORIES.to_string();
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load suggestions");
                        self.intelligence.error = Some(e.user_message());
                        self.intelligence.restoring = false;
                    }
                }
            }
            ApiResponse::SuggestionDismissed { id, result } => {
                if let Err(e) = result {
                    tracing::error!(suggestion = %id, error = %e, "Failed to dismiss suggestion");
                    self.intelligence.error = Some(e.user_message());
                    self.intelligence.restoring = true;
                    // Restore the optimistically removed entry from the server.
                    self.request(ApiRequest::LoadSuggestions);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// Restore the persisted page and timeline filters.
    pub fn apply_session(&mut self, session: SessionData) {
        self.page = session.page;
        self.timeline_filter = session.timeline_filter;
    }

    pub fn session_snapshot(&self) -> SessionData {
        SessionData::new(self.page, self.timeline_filter.clone())
    }

    /// Persist the session if a path is configured. Failures are logged.
    pub fn save_session(&self) {
        let Some(ref path) = self.session_path else {
            return;
        };
        if let Err(e) = session::save(&self.session_snapshot(), path) {
            tracing::warn!(error = %e, "Failed to save session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::ApiError;
    use chrono::Utc;

    fn status_error(failure: &'static str) -> ApiError {
        ApiError::Status {
            failure,
            endpoint: "/x".to_string(),
            status: 500,
            detail: None,
        }
    }

    fn creditor(id: &str, name: &str) -> Creditor {
        Creditor {
            id: id.to_string(),
            name: name.to_string(),
            address: "1 Main St".to_string(),
            contact_method: Default::default(),
            tags: vec![],
        }
    }

    fn event(stage: &str) -> RemedyEvent {
        RemedyEvent {
            id: stage.to_string(),
            timestamp: Utc::now(),
            action: "x".to_string(),
            actor: Actor::User,
            stage: stage.to_string(),
            document_url: None,
        }
    }

    #[test]
    fn test_start_queues_providers_and_dashboard() {
        let mut state = AppState::default();
        state.start();
        assert_eq!(
            state.take_requests(),
            vec![
                ApiRequest::LoadRemedyLog,
                ApiRequest::LoadStatutes,
                ApiRequest::LoadCreditors
            ]
        );
        assert!(state.remedy_log.loading);
        assert!(state.creditors.loading);
        assert!(state.take_requests().is_empty());
    }

    #[test]
    fn test_navigate_notice_generator_loads_templates_and_creditors() {
        let mut state = AppState::default();
        state.navigate(Page::NoticeGenerator);
        assert_eq!(state.page, Page::NoticeGenerator);
        assert_eq!(
            state.take_requests(),
            vec![ApiRequest::LoadNoticeTemplates, ApiRequest::LoadCreditors]
        );
    }

    #[test]
    fn test_invalid_creditor_form_sets_error_without_request() {
        let mut state = AppState::default();
        state.submit_creditor();
        assert_eq!(
            state.creditor_form.error.as_deref(),
            Some("Creditor name is required.")
        );
        assert!(state.take_requests().is_empty());
    }

    #[test]
    fn test_failed_creditor_create_keeps_form() {
        let mut state = AppState::default();
        state.creditor_form.form.name = "Acme".to_string();
        state.creditor_form.form.address = "x".to_string();
        state.submit_creditor();
        state.take_requests();
        state.handle_response(ApiResponse::CreditorCreated {
            name: "Acme".to_string(),
            result: Err(status_error("Failed to add creditor.")),
        });
        assert_eq!(
            state.creditor_form.error.as_deref(),
            Some("Failed to add creditor.")
        );
        assert_eq!(state.creditor_form.form.name, "Acme");
        assert!(state.take_requests().is_empty());
    }

    #[test]
    fn test_generate_notice_requires_both_selections() {
        let mut state = AppState::default();
        state.notices.selected_template = Some("debt_validation.j2".to_string());
        state.generate_notice();
        assert_eq!(
            state.notices.error.as_deref(),
            Some("Please select a template and a creditor.")
        );
        assert!(state.take_requests().is_empty());

        state.notices.selected_creditor = Some("c1".to_string());
        state.generate_notice();
        assert!(state.notices.error.is_none());
        assert!(state.notices.loading);
        assert_eq!(
            state.take_requests(),
            vec![ApiRequest::GenerateNotice {
                template_name: "debt_validation.j2".to_string(),
                creditor_id: "c1".to_string(),
                user_id: DEFAULT_USER_ID.to_string(),
            }]
        );
    }

    #[test]
    fn test_notice_generation_error_shows_server_detail() {
        let mut state = AppState::default();
        state.notices.loading = true;
        state.handle_response(ApiResponse::NoticeGenerated(Err(ApiError::Status {
            failure: "Failed to generate notice.",
            endpoint: "/api/notices/generate".to_string(),
            status: 404,
            detail: Some("Creditor not found".to_string()),
        })));
        assert!(!state.notices.loading);
        assert_eq!(state.notices.error.as_deref(), Some("Creditor not found"));
    }

    #[test]
    fn test_affidavit_success_logs_remedy_event() {
        let mut state = AppState::default();
        state.creditors.creditors = vec![creditor("c1", "Acme Bank")];
        state.remedy_log.events = vec![event("notice")];
        state.affidavit.selected_creditor = Some("c1".to_string());
        state.generate_affidavit();
        match state.take_requests().as_slice() {
            [ApiRequest::GenerateAffidavit { creditor, events }] => {
                assert_eq!(creditor.name, "Acme Bank");
                assert_eq!(events.len(), 1);
            }
            other => panic!("unexpected requests: {other:?}"),
        }

        state.handle_response(ApiResponse::AffidavitGenerated {
            creditor_name: "Acme Bank".to_string(),
            result: Ok("AFFIDAVIT".to_string()),
        });
        assert_eq!(state.affidavit.affidavit_text, "AFFIDAVIT");
        assert_eq!(
            state.take_requests(),
            vec![ApiRequest::AddRemedyEvent(NewRemedyEvent {
                action: "Affidavit generated for Acme Bank".to_string(),
                actor: Actor::User,
                stage: "endorsement".to_string(),
                document_url: None,
            })]
        );
    }

    #[test]
    fn test_affidavit_requires_known_creditor() {
        let mut state = AppState::default();
        state.affidavit.selected_creditor = Some("missing".to_string());
        state.generate_affidavit();
        assert_eq!(
            state.affidavit.error.as_deref(),
            Some("Please select a creditor.")
        );
        assert!(state.take_requests().is_empty());
    }

    #[test]
    fn test_simulate_next_stage_posts_first_incomplete_stage() {
        let mut state = AppState::default();
        state.remedy_log.events = vec![event("notice"), event("affidavit")];
        state.simulate_next_stage();
        assert_eq!(
            state.take_requests(),
            vec![ApiRequest::AddRemedyEvent(NewRemedyEvent {
                action: "Simulated Response Received".to_string(),
                actor: Actor::System,
                stage: "response".to_string(),
                document_url: None,
            })]
        );

        state.remedy_log.events = ["notice", "response", "rebuttal", "endorsement"]
            .iter()
            .map(|s| event(s))
            .collect();
        state.simulate_next_stage();
        assert!(state.take_requests().is_empty());
    }

    #[test]
    fn test_added_event_is_appended() {
        let mut state = AppState::default();
        state.handle_response(ApiResponse::RemedyEventAdded(Ok(event("rebuttal"))));
        assert_eq!(state.completed_stages(), vec!["rebuttal".to_string()]);
    }

    #[test]
    fn test_bill_endorsement_refetches_bills_and_log() {
        let mut state = AppState::default();
        state.endorse_bill("b1");
        assert_eq!(
            state.take_requests(),
            vec![ApiRequest::EndorseBill {
                bill_id: "b1".to_string()
            }]
        );
        state.handle_response(ApiResponse::BillEndorsed(Ok(())));
        assert_eq!(
            state.take_requests(),
            vec![ApiRequest::LoadBills, ApiRequest::LoadRemedyLog]
        );
        assert!(state.bills.loading);
    }

    #[test]
    fn test_profile_load_and_save_carries_declarations() {
        let mut state = AppState::default();
        state.save_profile();
        assert!(state.take_requests().is_empty());

        state.handle_response(ApiResponse::Profile(Ok(UserProfile {
            id: "user-001".to_string(),
            full_name: "Jane Doe".to_string(),
            address: "1 Main St".to_string(),
            status: None,
            declarations: Some(vec!["one".to_string(), "two".to_string()]),
        })));
        assert_eq!(state.profile.declarations_text, "one\ntwo");

        state.profile.declarations_text = "one\ntwo\nthree".to_string();
        state.save_profile();
        match state.take_requests().as_slice() {
            [ApiRequest::SaveProfile(profile)] => {
                assert_eq!(profile.declarations.as_ref().map(Vec::len), Some(3));
            }
            other => panic!("unexpected requests: {other:?}"),
        }
        state.handle_response(ApiResponse::ProfileSaved(Ok(())));
        assert_eq!(
            state.profile.success.as_deref(),
            Some("Profile saved successfully!")
        );
    }

    #[test]
    fn test_failed_load_sets_verbatim_error_and_clears_loading() {
        let mut state = AppState::default();
        state.navigate(Page::BillEndorsement);
        state.take_requests();
        state.handle_response(ApiResponse::Bills(Err(status_error("Failed to fetch bills."))));
        assert!(!state.bills.loading);
        assert_eq!(state.bills.error.as_deref(), Some("Failed to fetch bills."));
    }

    #[test]
    fn test_dismiss_error_survives_rollback_then_clears_on_reload() {
        let mut state = AppState::default();
        state.handle_response(ApiResponse::SuggestionDismissed {
            id: SuggestionId::Number(1),
            result: Err(status_error("Failed to dismiss suggestion")),
        });
        assert_eq!(state.take_requests(), vec![ApiRequest::LoadSuggestions]);

        state.handle_response(ApiResponse::Suggestions(Ok(vec![])));
        assert_eq!(
            state.intelligence.error.as_deref(),
            Some("Failed to dismiss suggestion")
        );

        state.handle_response(ApiResponse::Suggestions(Ok(vec![])));
        assert!(state.intelligence.error.is_none());
    }

    #[test]
    fn test_template_reload_clears_stale_notice_error() {
        let mut state = AppState::default();
        state.handle_response(ApiResponse::NoticeTemplates(Err(status_error(
            "Failed to load templates.",
        ))));
        assert!(state.notices.error.is_some());
        state.handle_response(ApiResponse::NoticeTemplates(Ok(vec![
            "debt_validation.j2".to_string(),
        ])));
        assert!(state.notices.error.is_none());
        assert_eq!(state.notices.templates.len(), 1);
    }
}

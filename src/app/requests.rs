// Sovereign Navigator - app/requests.rs
//
// Background execution of API requests.
//
// Architecture:
//   - `RequestManager` lives on the UI thread; each request runs on its own
//     short-lived background thread using the blocking `ApiClient`.
//   - Results come back as `ApiResponse` messages over one mpsc channel and
//     are drained by the UI each frame.
//   - Requests are independent: no ordering between them, no cancellation,
//     no retries.

use crate::app::api::ApiClient;
use crate::core::model::{
    Creditor, DispatchEvent, DispatchStatus, MonthlyBill, NewCreditor, NewRemedyEvent,
    NewViolation, RawSuggestion, RemedyEvent, Statute, SuggestionId, UserProfile, Violation,
};
use crate::util::constants::DISPATCH_STATUS_UNKNOWN;
use crate::util::error::ApiError;
use std::sync::mpsc;

/// A unit of work for the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    LoadCreditors,
    CreateCreditor(NewCreditor),
    LoadRemedyLog,
    AddRemedyEvent(NewRemedyEvent),
    LoadStatutes,
    LoadNoticeTemplates,
    GenerateNotice {
        template_name: String,
        creditor_id: String,
        user_id: String,
    },
    LoadBills,
    EndorseBill {
        bill_id: String,
    },
    /// List dispatches, then resolve each notice's status.
    LoadDispatches,
    UpdateDispatchStatus {
        dispatch_id: String,
        status: DispatchStatus,
    },
    GenerateMailingAffidavit {
        dispatch_id: String,
    },
    LoadProfile,
    SaveProfile(UserProfile),
    /// Fetch the user profile, then generate the affidavit.
    GenerateAffidavit {
        creditor: Creditor,
        events: Vec<RemedyEvent>,
    },
    LoadViolations,
    LogViolation(NewViolation),
    LoadSuggestions,
    DismissSuggestion {
        id: SuggestionId,
        category: String,
    },
}

impl ApiRequest {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadCreditors => "load_creditors",
            Self::CreateCreditor(_) => "create_creditor",
            Self::LoadRemedyLog => "load_remedy_log",
            Self::AddRemedyEvent(_) => "add_remedy_event",
            Self::LoadStatutes => "load_statutes",
            Self::LoadNoticeTemplates => "load_notice_templates",
            Self::GenerateNotice { .. } => "generate_notice",
            Self::LoadBills => "load_bills",
            Self::EndorseBill { .. } => "endorse_bill",
            Self::LoadDispatches => "load_dispatches",
            Self::UpdateDispatchStatus { .. } => "update_dispatch_status",
            Self::GenerateMailingAffidavit { .. } => "generate_mailing_affidavit",
            Self::LoadProfile => "load_profile",
            Self::SaveProfile(_) => "save_profile",
            Self::GenerateAffidavit { .. } => "generate_affidavit",
            Self::LoadViolations => "load_violations",
            Self::LogViolation(_) => "log_violation",
            Self::LoadSuggestions => "load_suggestions",
            Self::DismissSuggestion { .. } => "dismiss_suggestion",
        }
    }
}

/// Result of one `ApiRequest`.
#[derive(Debug)]
pub enum ApiResponse {
    Creditors(Result<Vec<Creditor>, ApiError>),
    CreditorCreated {
        name: String,
        result: Result<(), ApiError>,
    },
    RemedyLog(Result<Vec<RemedyEvent>, ApiError>),
    RemedyEventAdded(Result<RemedyEvent, ApiError>),
    Statutes(Result<Vec<Statute>, ApiError>),
    NoticeTemplates(Result<Vec<String>, ApiError>),
    NoticeGenerated(Result<String, ApiError>),
    Bills(Result<Vec<MonthlyBill>, ApiError>),
    BillEndorsed(Result<(), ApiError>),
    Dispatches(Result<Vec<DispatchEvent>, ApiError>),
    DispatchStatusUpdated(Result<(), ApiError>),
    MailingAffidavit(Result<String, ApiError>),
    Profile(Result<UserProfile, ApiError>),
    ProfileSaved(Result<(), ApiError>),
    AffidavitGenerated {
        creditor_name: String,
        result: Result<String, ApiError>,
    },
    Violations(Result<Vec<Violation>, ApiError>),
    ViolationLogged(Result<(), ApiError>),
    Suggestions(Result<Vec<RawSuggestion>, ApiError>),
    SuggestionDismissed {
        id: SuggestionId,
        result: Result<(), ApiError>,
    },
}

/// Run one request to completion on the calling thread.
pub fn execute(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::LoadCreditors => ApiResponse::Creditors(client.list_creditors()),
        ApiRequest::CreateCreditor(creditor) => ApiResponse::CreditorCreated {
            result: client.create_creditor(&creditor),
            name: creditor.name,
        },
        ApiRequest::LoadRemedyLog => ApiResponse::RemedyLog(client.list_remedy_log()),
        ApiRequest::AddRemedyEvent(event) => {
            ApiResponse::RemedyEventAdded(client.add_remedy_event(&event))
        }
        ApiRequest::LoadStatutes => ApiResponse::Statutes(client.list_statutes()),
        ApiRequest::LoadNoticeTemplates => {
            ApiResponse::NoticeTemplates(client.list_notice_templates())
        }
        ApiRequest::GenerateNotice {
            template_name,
            creditor_id,
            user_id,
        } => ApiResponse::NoticeGenerated(client.generate_notice(
            &template_name,
            &user_id,
            &creditor_id,
        )),
        ApiRequest::LoadBills => ApiResponse::Bills(client.list_monthly_bills()),
        ApiRequest::EndorseBill { bill_id } => {
            ApiResponse::BillEndorsed(client.endorse_bill(&bill_id))
        }
        ApiRequest::LoadDispatches => ApiResponse::Dispatches(load_dispatches(client)),
        ApiRequest::UpdateDispatchStatus {
            dispatch_id,
            status,
        } => ApiResponse::DispatchStatusUpdated(
            client.update_dispatch_status(&dispatch_id, status),
        ),
        ApiRequest::GenerateMailingAffidavit { dispatch_id } => {
            ApiResponse::MailingAffidavit(client.generate_mailing_affidavit(&dispatch_id))
        }
        ApiRequest::LoadProfile => ApiResponse::Profile(client.get_user_profile()),
        ApiRequest::SaveProfile(profile) => {
            ApiResponse::ProfileSaved(client.save_user_profile(&profile))
        }
        ApiRequest::GenerateAffidavit { creditor, events } => {
            let result = client
                .get_user_profile()
                .map_err(|e| e.with_failure("Failed to fetch user profile."))
                .and_then(|user| client.generate_affidavit(&user, &creditor, &events));
            ApiResponse::AffidavitGenerated {
                creditor_name: creditor.name,
                result,
            }
        }
        ApiRequest::LoadViolations => ApiResponse::Violations(client.list_violations()),
        ApiRequest::LogViolation(violation) => {
            ApiResponse::ViolationLogged(client.log_violation(&violation))
        }
        ApiRequest::LoadSuggestions => ApiResponse::Suggestions(client.list_suggestions()),
        ApiRequest::DismissSuggestion { id, category } => ApiResponse::SuggestionDismissed {
            result: client.resolve_suggestion(&id, &category),
            id,
        },
    }
}

/// List dispatches and annotate each with its notice's status.
///
/// Only the list call can fail the request; a notice lookup that fails for
/// any reason leaves that dispatch marked `N/A`.
fn load_dispatches(client: &ApiClient) -> Result<Vec<DispatchEvent>, ApiError> {
    let mut dispatches = client.list_dispatches()?;
    for dispatch in &mut dispatches {
        let status = if dispatch.is_notice() {
            match client.notice_status(&dispatch.document_id) {
                Ok(status) => status,
                Err(e) => {
                    tracing::debug!(
                        document = %dispatch.document_id,
                        error = %e,
                        "Notice status unavailable"
                    );
                    DISPATCH_STATUS_UNKNOWN.to_string()
                }
            }
        } else {
            DISPATCH_STATUS_UNKNOWN.to_string()
        };
        dispatch.status = Some(status);
    }
    Ok(dispatches)
}

// =============================================================================
// RequestManager
// =============================================================================

/// Runs requests on background threads and collects their results.
pub struct RequestManager {
    client: ApiClient,
    tx: mpsc::Sender<ApiResponse>,
    rx: mpsc::Receiver<ApiResponse>,
    in_flight: usize,
}

impl RequestManager {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Start `request` on a background thread. Never blocks.
    pub fn dispatch(&mut self, request: ApiRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let name = request.name();
        self.in_flight += 1;
        tracing::debug!(request = name, in_flight = self.in_flight, "Dispatching request");

        std::thread::spawn(move || {
            let response = execute(&client, request);
            // Receiver dropped means the UI closed; nothing left to do.
            let _ = tx.send(response);
        });
    }

    /// Drain up to `max` finished responses without blocking.
    pub fn poll(&mut self, max: usize) -> Vec<ApiResponse> {
        let mut responses = Vec::new();
        while responses.len() < max {
            match self.rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(_) => break,
            }
        }
        self.in_flight = self.in_flight.saturating_sub(responses.len());
        responses
    }

    /// Number of dispatched requests whose responses have not been polled.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

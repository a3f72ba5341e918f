// Sovereign Navigator - app/api.rs
//
// Blocking REST client for the record-keeping backend.
//
// Every call is a single request/response pair: no retries, no caching.
// Calls block, so they must run off the UI thread (see `requests.rs`).
// A non-2xx status is an error; a JSON `detail` string in the error body
// is surfaced as the user-facing message.

use crate::core::model::{
    Creditor, DispatchEvent, DispatchStatus, MonthlyBill, NewCreditor, NewRemedyEvent,
    NewViolation, RawSuggestion, RemedyEvent, Statute, SuggestionId, UserProfile, Violation,
};
use crate::util::error::ApiError;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Request / response envelopes
// =============================================================================

#[derive(Debug, Serialize)]
struct NoticeRequest<'a> {
    template_name: &'a str,
    user_id: &'a str,
    creditor_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct NoticeResponse {
    notice_text: String,
}

#[derive(Debug, Deserialize)]
struct NoticeRecord {
    status: String,
}

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: DispatchStatus,
}

#[derive(Debug, Deserialize)]
struct MailingAffidavitResponse {
    affidavit_text: String,
}

#[derive(Debug, Serialize)]
struct AffidavitRequest<'a> {
    user: &'a UserProfile,
    creditor: &'a Creditor,
    events: &'a [RemedyEvent],
}

#[derive(Debug, Deserialize)]
struct AffidavitResponse {
    affidavit: String,
}

#[derive(Debug, Serialize)]
struct ResolveSuggestion<'a> {
    action: &'static str,
    actor: &'static str,
    stage: &'a str,
    document_url: Option<String>,
}

/// Error body shape used by the backend (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Decode each array element on its own; malformed rows are logged and dropped.
fn decode_rows<T: DeserializeOwned>(rows: Vec<serde_json::Value>, endpoint: &str) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(endpoint, index, error = %e, "Skipping malformed row");
                None
            }
        })
        .collect()
}

// =============================================================================
// ApiClient
// =============================================================================

/// REST client bound to one backend base URL. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and reject non-success statuses.
    fn send(
        &self,
        builder: RequestBuilder,
        endpoint: &str,
        failure: &'static str,
    ) -> Result<Response, ApiError> {
        tracing::debug!(endpoint, "Sending request");
        let response = builder.send().map_err(|source| {
            tracing::warn!(endpoint, error = %source, "Request failed");
            ApiError::Transport {
                failure,
                endpoint: endpoint.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(endpoint, status = status.as_u16(), "Response received");
            return Ok(response);
        }

        let detail = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.detail)
            .and_then(|d| d.as_str().map(str::to_string));
        tracing::warn!(endpoint, status = status.as_u16(), "Request rejected by server");
        Err(ApiError::Status {
            failure,
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            detail,
        })
    }

    fn decode<T: DeserializeOwned>(
        response: Response,
        endpoint: &str,
        failure: &'static str,
    ) -> Result<T, ApiError> {
        response.json::<T>().map_err(|source| {
            tracing::warn!(endpoint, error = %source, "Response body did not decode");
            ApiError::Decode {
                failure,
                endpoint: endpoint.to_string(),
                source,
            }
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, failure: &'static str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path)), path, failure)?;
        Self::decode(response, path, failure)
    }

    fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        failure: &'static str,
    ) -> Result<Response, ApiError> {
        let builder = self.http.request(method, self.url(path)).json(body);
        self.send(builder, path, failure)
    }

    // -------------------------------------------------------------------------
    // Creditors
    // -------------------------------------------------------------------------

    pub fn list_creditors(&self) -> Result<Vec<Creditor>, ApiError> {
        self.get_json("/creditors", "Failed to fetch creditors.")
    }

    pub fn create_creditor(&self, creditor: &NewCreditor) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/creditors", creditor, "Failed to add creditor.")?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Remedy log
    // -------------------------------------------------------------------------

    /// Events that fail to decode (e.g. an unparseable timestamp) are
    /// skipped so the rest of the log still renders.
    pub fn list_remedy_log(&self) -> Result<Vec<RemedyEvent>, ApiError> {
        let path = "/remedy-log";
        let rows: Vec<serde_json::Value> = self.get_json(path, "Failed to fetch remedy log.")?;
        Ok(decode_rows(rows, path))
    }

    pub fn add_remedy_event(&self, event: &NewRemedyEvent) -> Result<RemedyEvent, ApiError> {
        let failure = "Failed to post new event.";
        let response = self.send_json(Method::POST, "/remedy-log", event, failure)?;
        Self::decode(response, "/remedy-log", failure)
    }

    // -------------------------------------------------------------------------
    // Statutes
    // -------------------------------------------------------------------------

    pub fn list_statutes(&self) -> Result<Vec<Statute>, ApiError> {
        self.get_json("/api/statutes", "Failed to fetch statutes.")
    }

    // -------------------------------------------------------------------------
    // Notices
    // -------------------------------------------------------------------------

    pub fn list_notice_templates(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/api/notices/templates", "Failed to load notice templates.")
    }

    pub fn generate_notice(
        &self,
        template_name: &str,
        user_id: &str,
        creditor_id: &str,
    ) -> Result<String, ApiError> {
        let failure = "Failed to generate notice.";
        let path = "/api/notices/generate";
        let body = NoticeRequest {
            template_name,
            user_id,
            creditor_id,
        };
        let response = self.send_json(Method::POST, path, &body, failure)?;
        let notice: NoticeResponse = Self::decode(response, path, failure)?;
        Ok(notice.notice_text)
    }

    /// Status of a generated notice (used to annotate dispatches).
    pub fn notice_status(&self, notice_id: &str) -> Result<String, ApiError> {
        let record: NoticeRecord = self.get_json(
            &format!("/api/notices/{notice_id}"),
            "Failed to fetch notice.",
        )?;
        Ok(record.status)
    }

    // -------------------------------------------------------------------------
    // Monthly bills
    // -------------------------------------------------------------------------

    pub fn list_monthly_bills(&self) -> Result<Vec<MonthlyBill>, ApiError> {
        self.get_json("/api/monthly-bills", "Failed to fetch bills.")
    }

    /// The backend records the matching remedy event itself.
    pub fn endorse_bill(&self, bill_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/monthly-bills/{bill_id}/endorse");
        self.send(
            self.http.post(self.url(&path)),
            &path,
            "Failed to endorse bill.",
        )?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    pub fn list_dispatches(&self) -> Result<Vec<DispatchEvent>, ApiError> {
        self.get_json("/api/dispatch", "Failed to fetch dispatches")
    }

    pub fn update_dispatch_status(
        &self,
        dispatch_id: &str,
        status: DispatchStatus,
    ) -> Result<(), ApiError> {
        let path = format!("/api/dispatch/{dispatch_id}/status");
        self.send_json(
            Method::PUT,
            &path,
            &StatusUpdate { status },
            "Failed to update status",
        )?;
        Ok(())
    }

    pub fn generate_mailing_affidavit(&self, dispatch_id: &str) -> Result<String, ApiError> {
        let failure = "Affidavit generation failed";
        let path = format!("/api/affidavit/mailing/{dispatch_id}");
        let response = self.send(self.http.post(self.url(&path)), &path, failure)?;
        let body: MailingAffidavitResponse = Self::decode(response, &path, failure)?;
        Ok(body.affidavit_text)
    }

    // -------------------------------------------------------------------------
    // User profile and affidavits
    // -------------------------------------------------------------------------

    pub fn get_user_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/user-profile", "Failed to load profile.")
    }

    pub fn save_user_profile(&self, profile: &UserProfile) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            "/api/user-profile",
            profile,
            "Failed to save profile.",
        )?;
        Ok(())
    }

    pub fn generate_affidavit(
        &self,
        user: &UserProfile,
        creditor: &Creditor,
        events: &[RemedyEvent],
    ) -> Result<String, ApiError> {
        let failure = "Affidavit generation failed.";
        let path = "/api/affidavit/generate";
        let body = AffidavitRequest {
            user,
            creditor,
            events,
        };
        let response = self.send_json(Method::POST, path, &body, failure)?;
        let affidavit: AffidavitResponse = Self::decode(response, path, failure)?;
        Ok(affidavit.affidavit)
    }

    // -------------------------------------------------------------------------
    // Violations
    // -------------------------------------------------------------------------

    pub fn list_violations(&self) -> Result<Vec<Violation>, ApiError> {
        self.get_json("/api/violations", "Failed to fetch violations.")
    }

    pub fn log_violation(&self, violation: &NewViolation) -> Result<(), ApiError> {
        self.send_json(
            Method::POST,
            "/api/violations",
            violation,
            "Failed to log violation.",
        )?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Intelligence suggestions
    // -------------------------------------------------------------------------

    pub fn list_suggestions(&self) -> Result<Vec<RawSuggestion>, ApiError> {
        self.get_json(
            "/api/intelligence/suggestions",
            "Failed to load suggestions",
        )
    }

    /// Mark a suggestion dismissed; `stage` is the suggestion's category.
    pub fn resolve_suggestion(&self, id: &SuggestionId, stage: &str) -> Result<(), ApiError> {
        let path = format!("/api/intelligence/suggestions/{id}/resolve");
        let body = ResolveSuggestion {
            action: "dismiss_suggestion",
            actor: "user",
            stage,
            document_url: None,
        };
        self.send_json(Method::PATCH, &path, &body, "Failed to dismiss suggestion")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.url("/creditors"), "http://127.0.0.1:8000/creditors");
    }

    #[test]
    fn test_resolve_body_shape() {
        let body = ResolveSuggestion {
            action: "dismiss_suggestion",
            actor: "user",
            stage: "Bills",
            document_url: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["action"], "dismiss_suggestion");
        assert_eq!(json["stage"], "Bills");
        assert!(json["document_url"].is_null());
    }

    #[test]
    fn test_decode_rows_skips_malformed_events() {
        let rows = serde_json::json!([
            {"id": "e1", "timestamp": "2024-03-01T09:00:00", "action": "a",
             "actor": "user", "stage": "notice"},
            {"id": "e2", "timestamp": "03/01/2024", "action": "b",
             "actor": "user", "stage": "rebuttal"},
            {"id": "e3", "timestamp": "2024-03-02", "action": "c",
             "actor": "system", "stage": "response"}
        ]);
        let rows: Vec<serde_json::Value> = serde_json::from_value(rows).unwrap();
        let events: Vec<RemedyEvent> = decode_rows(rows, "/remedy-log");
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e3"]);
    }

    #[test]
    fn test_status_update_body_is_lowercase() {
        let json = serde_json::to_value(StatusUpdate {
            status: DispatchStatus::Delivered,
        })
        .unwrap();
        assert_eq!(json["status"], "delivered");
    }
}

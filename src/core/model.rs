// Sovereign Navigator - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These are the wire shapes of the backend API and the shared vocabulary
// across all layers. None of them carry invariants beyond field presence;
// creation, mutation, and deletion belong to the backend.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Creditors
// =============================================================================

/// How a creditor prefers to be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Mail,
    Email,
}

impl ContactMethod {
    pub fn all() -> &'static [ContactMethod] {
        &[ContactMethod::Mail, ContactMethod::Email]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Mail => "Mail",
            ContactMethod::Email => "Email",
        }
    }

    /// Wire value, as shown in "Contact via: ...".
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Mail => "mail",
            ContactMethod::Email => "email",
        }
    }
}

/// A creditor as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creditor {
    pub id: String,
    pub name: String,
    pub address: String,
    pub contact_method: ContactMethod,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body of a create-creditor request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCreditor {
    pub name: String,
    pub address: String,
    pub contact_method: ContactMethod,
    pub tags: Vec<String>,
}

// =============================================================================
// Remedy log
// =============================================================================

/// Who performed a logged action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    User,
    System,
}

impl Actor {
    pub fn all() -> &'static [Actor] {
        &[Actor::User, Actor::System]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Actor::User => "User",
            Actor::System => "System",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Actor::User => "user",
            Actor::System => "system",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stage tags the client knows how to present.
///
/// Events carry their stage as a free string so that tags introduced by the
/// backend (or by dismissed suggestions) survive a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Notice,
    Response,
    Rebuttal,
    Affidavit,
    Endorsement,
    Violation,
}

impl Stage {
    pub fn from_tag(tag: &str) -> Option<Stage> {
        match tag {
            "notice" => Some(Stage::Notice),
            "response" => Some(Stage::Response),
            "rebuttal" => Some(Stage::Rebuttal),
            "affidavit" => Some(Stage::Affidavit),
            "endorsement" => Some(Stage::Endorsement),
            "violation" => Some(Stage::Violation),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Stage::Notice => "notice",
            Stage::Response => "response",
            Stage::Rebuttal => "rebuttal",
            Stage::Affidavit => "affidavit",
            Stage::Endorsement => "endorsement",
            Stage::Violation => "violation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Notice => "Notice",
            Stage::Response => "Response",
            Stage::Rebuttal => "Rebuttal",
            Stage::Affidavit => "Affidavit",
            Stage::Endorsement => "Endorsement",
            Stage::Violation => "Violation",
        }
    }

    /// Stages offered by the timeline stage filter.
    pub fn timeline_filter_options() -> &'static [Stage] {
        &[
            Stage::Notice,
            Stage::Rebuttal,
            Stage::Affidavit,
            Stage::Endorsement,
        ]
    }
}

/// Timeline icon for a stage tag. Unknown tags get a neutral marker.
pub fn stage_icon(tag: &str) -> &'static str {
    match Stage::from_tag(tag) {
        Some(Stage::Notice) => "\u{2709}",
        Some(Stage::Rebuttal) => "\u{1f6e1}",
        Some(Stage::Affidavit) => "\u{1f4dc}",
        Some(Stage::Endorsement) => "\u{1f4b8}",
        Some(Stage::Violation) => "\u{2696}",
        Some(Stage::Response) | None => "\u{1f535}",
    }
}

/// A single logged action in the remedy process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemedyEvent {
    pub id: String,
    #[serde(with = "wire_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub actor: Actor,
    pub stage: String,
    #[serde(
        rename = "documentUrl",
        alias = "document_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_url: Option<String>,
}

/// Body of a create-event request; the backend assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRemedyEvent {
    pub action: String,
    pub actor: Actor,
    pub stage: String,
    #[serde(
        rename = "documentUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_url: Option<String>,
}

// =============================================================================
// Statutes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statute {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// =============================================================================
// Monthly bills
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBill {
    pub id: String,
    pub user_id: String,
    pub creditor_id: String,
    pub due_date: String,
    pub amount_due: f64,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub endorsement_date: Option<String>,
    #[serde(default)]
    pub document_url: Option<String>,
}

impl MonthlyBill {
    /// Only pending bills can be endorsed.
    pub fn is_pending(&self) -> bool {
        self.status == crate::util::constants::BILL_STATUS_PENDING
    }

    pub fn amount_label(&self) -> String {
        format!("${:.2}", self.amount_due)
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Delivery states a dispatched document moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    Draft,
    Sent,
    Delivered,
    Responded,
}

impl DispatchStatus {
    pub fn all() -> &'static [DispatchStatus] {
        &[
            DispatchStatus::Draft,
            DispatchStatus::Sent,
            DispatchStatus::Delivered,
            DispatchStatus::Responded,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::Draft => "draft",
            DispatchStatus::Sent => "sent",
            DispatchStatus::Delivered => "delivered",
            DispatchStatus::Responded => "responded",
        }
    }
}

/// A mailed or otherwise dispatched document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchEvent {
    pub id: String,
    pub document_id: String,
    pub document_type: String,
    pub dispatch_method: String,
    #[serde(default)]
    pub tracking_number: Option<String>,
    pub sent_at: String,
    #[serde(default)]
    pub delivered_at: Option<String>,
    #[serde(default)]
    pub responded_at: Option<String>,
    /// Resolved on the client from the linked notice; never sent.
    #[serde(default, skip_serializing)]
    pub status: Option<String>,
}

impl DispatchEvent {
    /// Mailing affidavits exist only for notices.
    pub fn is_notice(&self) -> bool {
        self.document_type == "notice"
    }

    pub fn status_label(&self) -> &str {
        self.status
            .as_deref()
            .unwrap_or(crate::util::constants::DISPATCH_STATUS_UNKNOWN)
    }
}

// =============================================================================
// User profile
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub address: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub declarations: Option<Vec<String>>,
}

// =============================================================================
// Violations
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub id: String,
    pub date: String,
    pub collector: String,
    pub violation_type: String,
    #[serde(default)]
    pub statute_reference: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewViolation {
    pub date: String,
    pub collector: String,
    pub violation_type: String,
    pub statute_reference: String,
    pub notes: String,
}

// =============================================================================
// Intelligence suggestions
// =============================================================================

/// Suggestion identifiers arrive as either strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionId::Number(n) => write!(f, "{n}"),
            SuggestionId::Text(s) => f.write_str(s),
        }
    }
}

/// Suggestion as served by the backend. Field names vary between versions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawSuggestion {
    pub id: SuggestionId,
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default, rename = "actionType", skip_serializing_if = "Option::is_none")]
    pub action_type_camel: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RawSuggestion {
    /// `action_type`, or `actionType` when the former is missing or empty.
    pub fn action_type(&self) -> Option<&str> {
        [self.action_type.as_deref(), self.action_type_camel.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    Overdue,
    Unresponded,
    Insight,
    Other,
}

impl SuggestionKind {
    pub fn icon(&self) -> &'static str {
        match self {
            SuggestionKind::Overdue => "\u{23f3}",
            SuggestionKind::Unresponded => "\u{26a0}",
            SuggestionKind::Insight => "\u{1f9e0}",
            SuggestionKind::Other => "\u{2733}",
        }
    }
}

/// Client-side suggestion after normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub kind: SuggestionKind,
    pub category: String,
    pub message: String,
    /// Page the "Act Now" button opens, if any.
    pub action: Option<Page>,
}

// =============================================================================
// Navigation
// =============================================================================

/// Top-level views, in navigation-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Dashboard,
    AffidavitForge,
    BillEndorsement,
    ViolationTracker,
    Profile,
    NoticeGenerator,
    DispatchTracker,
    IntelligenceConsole,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::AffidavitForge,
            Page::BillEndorsement,
            Page::ViolationTracker,
            Page::Profile,
            Page::NoticeGenerator,
            Page::DispatchTracker,
            Page::IntelligenceConsole,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::AffidavitForge => "Affidavit Forge",
            Page::BillEndorsement => "Bill Endorsement",
            Page::ViolationTracker => "FDCPA Tracker",
            Page::Profile => "Sovereign Profile",
            Page::NoticeGenerator => "Notice Generator",
            Page::DispatchTracker => "Dispatch Tracker",
            Page::IntelligenceConsole => "Intelligence",
        }
    }
}

// =============================================================================
// Timestamps
// =============================================================================

/// Parse a backend timestamp.
///
/// Accepts RFC 3339, naive ISO date-times (interpreted as UTC), and bare
/// dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Local date-time string for display, e.g. "2024-05-01 14:03:22".
pub fn format_local_datetime(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Display form of a raw backend date-time; falls back to the raw text.
pub fn display_datetime(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| format_local_datetime(&ts))
        .unwrap_or_else(|| raw.to_string())
}

/// Display form of a raw backend date; falls back to the raw text.
///
/// Bare dates are shown as written so that a UTC midnight never slides to
/// the previous day in western time zones.
pub fn display_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    parse_timestamp(raw)
        .map(|ts| ts.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Serde adapter for event timestamps (see `parse_timestamp`).
pub mod wire_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

// Sovereign Navigator - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Views show `ApiError::user_message()` verbatim; `Display` carries the
// full causal detail for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Sovereign Navigator operations.
#[derive(Debug)]
pub enum NavigatorError {
    /// A REST call to the backend failed.
    Api(ApiError),

    /// Writing or opening an export failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// A form was submitted with missing input.
    Form(FormError),
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Form(e) => write!(f, "Form error: {e}"),
        }
    }
}

impl std::error::Error for NavigatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Form(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// API errors
// ---------------------------------------------------------------------------

/// Errors produced by the REST client.
///
/// `failure` is the fixed, user-facing message for the operation
/// (e.g. "Failed to fetch creditors.").
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    ClientBuild { source: reqwest::Error },

    /// The request never produced a response (connection refused, timeout, ...).
    Transport {
        failure: &'static str,
        endpoint: String,
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    /// `detail` holds the server's `detail` field when one was supplied.
    Status {
        failure: &'static str,
        endpoint: String,
        status: u16,
        detail: Option<String>,
    },

    /// The response body did not match the expected shape.
    Decode {
        failure: &'static str,
        endpoint: String,
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Message shown to the user in the view that issued the request.
    pub fn user_message(&self) -> String {
        match self {
            Self::ClientBuild { .. } => "Failed to initialise the HTTP client.".to_string(),
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Status { failure, .. }
            | Self::Transport { failure, .. }
            | Self::Decode { failure, .. } => (*failure).to_string(),
        }
    }

    /// Replace the fixed user-facing message, keeping endpoint and cause.
    /// Used when a call runs as one step of a larger operation.
    pub fn with_failure(mut self, message: &'static str) -> Self {
        match &mut self {
            Self::ClientBuild { .. } => {}
            Self::Status { failure, .. }
            | Self::Transport { failure, .. }
            | Self::Decode { failure, .. } => *failure = message,
        }
        self
    }

    /// HTTP status code, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientBuild { source } => write!(f, "Cannot build HTTP client: {source}"),
            Self::Transport {
                failure,
                endpoint,
                source,
            } => write!(f, "{failure} Request to '{endpoint}' failed: {source}"),
            Self::Status {
                failure,
                endpoint,
                status,
                detail,
            } => match detail {
                Some(detail) => write!(f, "'{endpoint}' returned {status}: {detail}"),
                None => write!(f, "{failure} '{endpoint}' returned {status}"),
            },
            Self::Decode {
                failure,
                endpoint,
                source,
            } => write!(f, "{failure} Unexpected response from '{endpoint}': {source}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ClientBuild { source } => Some(source),
            Self::Transport { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

impl From<ApiError> for NavigatorError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to exporting timelines and generated documents.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// The printable document could not be handed to the system browser.
    Open { path: PathBuf, source: io::Error },

    /// There is nothing to export.
    Empty,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Open { path, source } => {
                write!(f, "Cannot open '{}' for printing: {source}", path.display())
            }
            Self::Empty => write!(f, "Nothing to export."),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Open { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<ExportError> for NavigatorError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for NavigatorError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Form errors
// ---------------------------------------------------------------------------

/// Errors raised when a form is submitted with incomplete input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required text field is blank.
    MissingField { field: &'static str },

    /// A required dropdown has no selection.
    /// `what` reads as the object of "Please select ...".
    SelectionRequired { what: &'static str },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{field} is required."),
            Self::SelectionRequired { what } => write!(f, "Please select {what}."),
        }
    }
}

impl std::error::Error for FormError {}

impl From<FormError> for NavigatorError {
    fn from(e: FormError) -> Self {
        Self::Form(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_server_detail() {
        let err = ApiError::Status {
            failure: "Failed to generate notice.",
            endpoint: "/api/notices/generate".to_string(),
            status: 422,
            detail: Some("Template not found".to_string()),
        };
        assert_eq!(err.user_message(), "Template not found");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_status_error_without_detail_uses_fixed_message() {
        let err = ApiError::Status {
            failure: "Failed to fetch creditors.",
            endpoint: "/creditors".to_string(),
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(), "Failed to fetch creditors.");
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_with_failure_replaces_fixed_message_only() {
        let err = ApiError::Status {
            failure: "Failed to load profile.",
            endpoint: "/api/user-profile".to_string(),
            status: 500,
            detail: None,
        }
        .with_failure("Failed to fetch user profile.");
        assert_eq!(err.user_message(), "Failed to fetch user profile.");
        assert_eq!(err.status(), Some(500));

        let err = ApiError::Status {
            failure: "Failed to load profile.",
            endpoint: "/api/user-profile".to_string(),
            status: 404,
            detail: Some("Profile not found".to_string()),
        }
        .with_failure("Failed to fetch user profile.");
        assert_eq!(err.user_message(), "Profile not found");
    }

    #[test]
    fn test_form_error_messages() {
        let err = FormError::SelectionRequired {
            what: "a template and a creditor",
        };
        assert_eq!(err.to_string(), "Please select a template and a creditor.");
        let err = FormError::MissingField {
            field: "Creditor name",
        };
        assert_eq!(err.to_string(), "Creditor name is required.");
    }

    #[test]
    fn test_navigator_error_chains_source() {
        use std::error::Error;
        let err = NavigatorError::from(FormError::MissingField { field: "Notes" });
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Form error"));
    }
}

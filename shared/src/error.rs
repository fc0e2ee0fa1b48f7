use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Client-side failures raised while preparing or converting page state.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Index out of range: {0}")]
    OutOfRange(usize),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

/// Failure of a single REST call, as surfaced to a page.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Response { status: u16, message: Option<String> },

    /// The request never got an answer.
    #[error("No response from server: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Authentication token not found. Please log in again.")]
    MissingToken,
}

impl ApiError {
    /// The backend's own message when it sent one, otherwise the page's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Response {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::MissingToken => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Text for blocking notices after a failed mutation.
    pub fn alert_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Response { .. } => format!("Error: {}", self.user_message(fallback)),
            ApiError::Network(_) => {
                "Error: No response from server. Please check your network.".to_string()
            }
            ApiError::MissingToken => format!("Error: {}", self),
            ApiError::Decode(_) | ApiError::Encode(_) => {
                "Error: An unexpected error occurred.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn missing_fields_lists_every_field() {
        let err = SharedError::MissingFields(vec!["Name".into(), "Start Date".into()]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: Name, Start Date"
        );
    }

    #[test]
    fn user_message_prefers_backend_message() {
        let err = ApiError::Response {
            status: 400,
            message: Some("Event is full".into()),
        };
        assert_eq!(err.user_message("Registration failed."), "Event is full");
    }

    #[test_case(ApiError::Response { status: 500, message: None } ; "no body")]
    #[test_case(ApiError::Response { status: 500, message: Some("  ".into()) } ; "blank body")]
    #[test_case(ApiError::Network("offline".into()) ; "network")]
    #[test_case(ApiError::Decode("eof".into()) ; "decode")]
    fn user_message_falls_back(err: ApiError) {
        assert_eq!(err.user_message("Failed to fetch results."), "Failed to fetch results.");
    }

    #[test]
    fn alert_message_distinguishes_failure_kinds() {
        let response = ApiError::Response {
            status: 403,
            message: Some("Not your event".into()),
        };
        assert_eq!(
            response.alert_message("Failed to delete event"),
            "Error: Not your event"
        );
        assert_eq!(
            ApiError::Network("x".into()).alert_message("Failed to delete event"),
            "Error: No response from server. Please check your network."
        );
        assert_eq!(
            ApiError::Decode("x".into()).alert_message("Failed to delete event"),
            "Error: An unexpected error occurred."
        );
    }

    #[test]
    fn missing_token_overrides_fallback() {
        assert_eq!(
            ApiError::MissingToken.user_message("Failed to load event details."),
            "Authentication token not found. Please log in again."
        );
    }
}

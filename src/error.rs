//! Error types shared by the API client and the view-state layer.

use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("server returned {status}{}", message_suffix(.message))]
    Server { status: u16, message: Option<String> },

    /// The response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid request url: {0}")]
    Url(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Text for a user notification: the server's own message when it sent
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::Url(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// A form rejected before anything was sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Blank(&'static str),

    #[error("{0} must be selected")]
    NotSelected(&'static str),
}

impl FormError {
    /// Display text with a leading capital, for notifications.
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_error_message_is_capitalized() {
        assert_eq!(FormError::Blank("email").user_message(), "Email is required");
        assert_eq!(
            FormError::NotSelected("category").user_message(),
            "Category must be selected"
        );
    }

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Server {
            status: 401,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn blank_or_missing_message_uses_fallback() {
        let blank = ApiError::Server {
            status: 500,
            message: Some("  ".into()),
        };
        let network = ApiError::Network("connection refused".into());
        assert_eq!(blank.user_message("Login failed"), "Login failed");
        assert_eq!(network.user_message("Login failed"), "Login failed");
        assert_eq!(network.status(), None);
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::Server {
            status: 404,
            message: Some("Product not found".into()),
        };
        assert_eq!(err.to_string(), "server returned 404: Product not found");
        let err = ApiError::Server {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "server returned 502");
    }
}

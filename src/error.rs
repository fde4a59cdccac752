//! Error Types
//!
//! Three ways an operation can fail: bad local input, a broken round trip,
//! or a server that answered `success: false`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Rejected locally, no request was sent
    #[error("{0}")]
    Validation(String),

    /// Network failure or unreadable response
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Rejected by server: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    /// Text for the error notification. Transport details stay in the
    /// console; the user sees `fallback` instead.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Rejected(Some(msg)) if !msg.trim().is_empty() => msg.clone(),
            ApiError::Rejected(_) | ApiError::Transport(_) => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_follows_taxonomy() {
        let fallback = "Could not save the menu";
        assert_eq!(ApiError::validation("Name is required").user_message(fallback), "Name is required");
        assert_eq!(ApiError::Transport("TypeError: Failed to fetch".into()).user_message(fallback), fallback);
        assert_eq!(ApiError::Rejected(Some("Unknown recipe".into())).user_message(fallback), "Unknown recipe");
        assert_eq!(ApiError::Rejected(None).user_message(fallback), fallback);
        assert_eq!(ApiError::Rejected(Some("  ".into())).user_message(fallback), fallback);
    }

    #[test]
    fn test_display_for_console() {
        assert_eq!(ApiError::Rejected(None).to_string(), "Rejected by server: no reason given");
        assert_eq!(ApiError::Transport("offline".into()).to_string(), "Request failed: offline");
    }
}

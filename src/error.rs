use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API round trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built or never got a response.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    /// A 2xx answer whose body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("no session token")]
    Unauthenticated,
}

impl ApiError {
    /// Text for the banner: the server's own message when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Pulls the `error` field out of a JSON error body.
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field() {
        assert_eq!(
            server_message(r#"{"error":"Insufficient balance"}"#),
            Some("Insufficient balance".to_string())
        );
    }

    #[test]
    fn missing_or_blank_error_field_yields_none() {
        assert_eq!(server_message(r#"{"message":"nope"}"#), None);
        assert_eq!(server_message(r#"{"error":"   "}"#), None);
        assert_eq!(server_message(r#"{"error":null}"#), None);
        assert_eq!(server_message("Internal Server Error"), None);
        assert_eq!(server_message(""), None);
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 400,
            message: Some("Receiver not found".to_string()),
        };
        assert_eq!(err.user_message("Error sending payment"), "Receiver not found");
    }

    #[test]
    fn user_message_falls_back() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Refund failed"), "Refund failed");
        assert_eq!(
            ApiError::Unauthenticated.user_message("Error adding money"),
            "Error adding money"
        );
        assert_eq!(
            ApiError::Decode("eof".to_string()).user_message("An error occurred"),
            "An error occurred"
        );
    }
}

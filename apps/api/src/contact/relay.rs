//! Contact relay — forwards a validated submission to the remote mail endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::contact::validation::ContactSubmission;

const DEFAULT_SUCCESS: &str = "Message sent successfully!";
const DEFAULT_REJECTION: &str = "Failed to send message.";
const TRANSPORT_FAILURE: &str = "Failed to send message. Please try again.";
const UNCONFIGURED: &str = "Failed to send message. Please try again or contact me directly.";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a non-success status; holds its error text.
    #[error("relay rejected submission: {0}")]
    Rejected(String),

    /// The reply body was not the JSON object the relay promises.
    #[error("malformed relay reply: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no contact relay endpoint configured")]
    Unconfigured,
}

impl RelayError {
    /// Text safe to show the visitor.
    pub fn user_message(&self) -> &str {
        match self {
            RelayError::Http(_) | RelayError::Malformed(_) => TRANSPORT_FAILURE,
            RelayError::Rejected(msg) => msg.as_str(),
            RelayError::Unconfigured => UNCONFIGURED,
        }
    }
}

/// Shape of the relay's JSON reply. Either field may be absent, but the body
/// itself must be a JSON object.
#[derive(Debug, Deserialize)]
struct RelayReply {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct ContactRelay {
    client: Client,
    endpoint: Option<String>,
}

impl ContactRelay {
    pub fn new(endpoint: Option<String>) -> Result<Self, RelayError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// POSTs the submission once. Returns the relay's success message.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<String, RelayError> {
        let endpoint = self.endpoint.as_deref().ok_or(RelayError::Unconfigured)?;
        let response = self.client.post(endpoint).json(submission).send().await?;
        let status = response.status();

        let body = response.text().await?;
        let reply: RelayReply = serde_json::from_str(&body).map_err(|e| {
            warn!("Contact relay returned {status} with a non-JSON body: {body}");
            RelayError::Malformed(e)
        })?;

        if status.is_success() {
            info!("Contact message relayed (status {status})");
            Ok(reply.message.unwrap_or_else(|| DEFAULT_SUCCESS.to_string()))
        } else {
            warn!("Contact relay returned {status}: {body}");
            Err(RelayError::Rejected(
                reply.error.unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::test_support::serve_fixed;

    #[test]
    fn test_reply_parses_partial_bodies() {
        let reply: RelayReply = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some("ok"));
        assert!(reply.error.is_none());

        let reply: RelayReply = serde_json::from_str(r#"{"error": "bad"}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("bad"));
    }

    #[test]
    fn test_rejection_user_message_is_relay_text() {
        let err = RelayError::Rejected("Mailbox full".to_string());
        assert_eq!(err.user_message(), "Mailbox full");
    }

    #[test]
    fn test_endpoint_accessor() {
        let relay = ContactRelay::new(Some("http://relay.test/api/contact".into())).unwrap();
        assert_eq!(relay.endpoint(), Some("http://relay.test/api/contact"));
        assert!(ContactRelay::new(None).unwrap().endpoint().is_none());
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_relay_never_sends() {
        let relay = ContactRelay::new(None).unwrap();
        let err = relay.send(&submission()).await.unwrap_err();
        assert!(matches!(err, RelayError::Unconfigured));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_failure() {
        let relay = ContactRelay::new(Some("http://127.0.0.1:1/api/contact".into())).unwrap();
        let err = relay.send(&submission()).await.unwrap_err();
        assert!(matches!(err, RelayError::Http(_)));
        assert_eq!(err.user_message(), TRANSPORT_FAILURE);
    }

    async fn send_to_stub(status: StatusCode, body: &'static str) -> Result<String, RelayError> {
        let base = serve_fixed(status, body).await;
        let relay = ContactRelay::new(Some(format!("{base}/api/contact"))).unwrap();
        relay.send(&submission()).await
    }

    #[tokio::test]
    async fn test_success_reply_returns_relay_message() {
        let message = send_to_stub(StatusCode::OK, r#"{"message": "Thanks, got it!"}"#)
            .await
            .unwrap();
        assert_eq!(message, "Thanks, got it!");
    }

    #[tokio::test]
    async fn test_success_reply_without_message_uses_default() {
        let message = send_to_stub(StatusCode::OK, "{}").await.unwrap();
        assert_eq!(message, DEFAULT_SUCCESS);
    }

    #[tokio::test]
    async fn test_error_status_returns_relay_error_text() {
        let err = send_to_stub(StatusCode::BAD_REQUEST, r#"{"error": "Mailbox full"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Rejected(_)));
        assert_eq!(err.user_message(), "Mailbox full");
    }

    #[tokio::test]
    async fn test_error_status_without_error_field_uses_default() {
        let err = send_to_stub(StatusCode::INTERNAL_SERVER_ERROR, "{}")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), DEFAULT_REJECTION);
    }

    #[tokio::test]
    async fn test_non_json_success_is_transport_failure() {
        let err = send_to_stub(StatusCode::OK, "<html>oops</html>")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Malformed(_)));
        assert_eq!(err.user_message(), TRANSPORT_FAILURE);
    }

    #[tokio::test]
    async fn test_non_json_error_status_is_transport_failure() {
        let err = send_to_stub(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Malformed(_)));
        assert_eq!(err.user_message(), TRANSPORT_FAILURE);
    }

    #[tokio::test]
    async fn test_empty_body_is_transport_failure() {
        let err = send_to_stub(StatusCode::OK, "").await.unwrap_err();
        assert_eq!(err.user_message(), TRANSPORT_FAILURE);
    }
}

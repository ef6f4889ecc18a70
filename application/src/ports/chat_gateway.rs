//! Chat Gateway port
//!
//! Defines the interface for communicating with the hosted model service.

use async_trait::async_trait;
use githelper_domain::Model;
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// Variants let callers categorize faults programmatically. Each variant
/// renders as its bare message: the shell passes fault text through to the
/// user literally, so `Display` must not add a category prefix.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Credential missing or rejected by the service
    #[error("{0}")]
    Auth(String),

    /// Quota or rate-limit rejection
    #[error("{0}")]
    RateLimited(String),

    /// Transport-level failure before a response was received
    #[error("{0}")]
    Connection(String),

    /// The service returned a non-success status
    #[error("{0}")]
    Api(String),

    /// The response body could not be interpreted
    #[error("{0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Check if this fault is credential-related
    pub fn is_auth(&self) -> bool {
        matches!(self, GatewayError::Auth(_))
    }
}

/// Gateway for chat model communication
///
/// This port defines how the application layer talks to the model service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Create a fresh single-turn session with the specified model
    async fn create_session(&self, model: &Model) -> Result<Box<dyn ChatSession>, GatewayError>;

    /// Get the known model inventory
    fn available_models(&self) -> Vec<Model>;
}

/// An active single-turn session
///
/// A session carries no history; it is created for one call and dropped
/// after the response is consumed.
#[async_trait]
pub trait ChatSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send one message and get the reply text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_bare_message() {
        let error = GatewayError::Auth("invalid api key".to_string());
        assert_eq!(error.to_string(), "invalid api key");

        let error = GatewayError::Connection("connection refused".to_string());
        assert_eq!(error.to_string(), "connection refused");
    }

    #[test]
    fn test_is_auth_check() {
        assert!(GatewayError::Auth("nope".into()).is_auth());
        assert!(!GatewayError::RateLimited("slow down".into()).is_auth());
    }
}

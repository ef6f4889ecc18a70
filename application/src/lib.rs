//! Application layer for githelper
//!
//! This crate contains the use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::chat_gateway::{ChatGateway, ChatSession, GatewayError};
pub use use_cases::ask::AskUseCase;

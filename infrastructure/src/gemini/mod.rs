//! Gemini adapter
//!
//! Implements the [`ChatGateway`](githelper_application::ChatGateway) port
//! against the Generative Language REST API.

pub mod gateway;
pub mod session;
pub mod types;

pub use gateway::GeminiGateway;
pub use session::GeminiSession;

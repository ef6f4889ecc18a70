//! Infrastructure layer for githelper
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileGeminiConfig, FileReplConfig, Settings};
pub use gemini::GeminiGateway;

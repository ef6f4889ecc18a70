//! Domain layer for githelper
//!
//! This crate contains the core value objects and prompt composition.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question / Answer
//!
//! One interaction is one `Question` in and one `Answer` out. An `Answer`
//! is always produced — a failed call to the model service becomes
//! `Answer::Failure` with the fault's message, never a propagated error.
//!
//! ## Single-turn sessions
//!
//! Every question starts a fresh conversation context. No history is
//! carried between calls.

pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use self::core::{answer::Answer, model::Model, question::Question};
pub use self::prompt::PromptTemplate;

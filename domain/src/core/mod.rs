//! Core domain concepts.
//!
//! - [`question::Question`] — one validated user input
//! - [`answer::Answer`] — the unified reply-or-failure result
//! - [`model::Model`] — available Gemini models

pub mod answer;
pub mod model;
pub mod question;

//! In-progress indication

pub mod spinner;

pub use spinner::Spinner;

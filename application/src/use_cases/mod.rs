//! Use cases

pub mod ask;

pub use ask::AskUseCase;

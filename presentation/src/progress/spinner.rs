//! Indeterminate spinner shown while a call is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Wraps an indicatif spinner with the lifecycle the shell needs: start on
/// submit, clear unconditionally when the call returns.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start spinning with the given message
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stop and erase the spinner line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

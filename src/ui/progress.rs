//! Progress reporting during provisioning.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Opaque progress indicator supplied by the host.
pub trait ProgressIndicator {
    /// Switch between indeterminate (spinner) and determinate display.
    fn set_indeterminate(&mut self, indeterminate: bool);

    /// Replace the status text.
    fn set_text(&mut self, text: &str);

    /// Stop displaying progress.
    fn finish(&mut self);
}

/// Terminal spinner backed by `indicatif`.
pub struct SpinnerIndicator {
    bar: ProgressBar,
}

impl SpinnerIndicator {
    /// Create a spinner drawing to stderr.
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        Self { bar }
    }
}

impl Default for SpinnerIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressIndicator for SpinnerIndicator {
    fn set_indeterminate(&mut self, indeterminate: bool) {
        if indeterminate {
            self.bar.enable_steady_tick(Duration::from_millis(80));
        } else {
            self.bar.disable_steady_tick();
        }
    }

    fn set_text(&mut self, text: &str) {
        self.bar.set_message(text.to_string());
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Indicator that displays nothing (quiet and JSON modes).
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenIndicator;

impl ProgressIndicator for HiddenIndicator {
    fn set_indeterminate(&mut self, _indeterminate: bool) {}

    fn set_text(&mut self, _text: &str) {}

    fn finish(&mut self) {}
}

/// Records every call for assertions.
#[derive(Debug, Default, Clone)]
pub struct MockIndicator {
    pub indeterminate: bool,
    pub texts: Vec<String>,
    pub finished: bool,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent status text.
    pub fn last_text(&self) -> Option<&str> {
        self.texts.last().map(String::as_str)
    }
}

impl ProgressIndicator for MockIndicator {
    fn set_indeterminate(&mut self, indeterminate: bool) {
        self.indeterminate = indeterminate;
    }

    fn set_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

/// Create the indicator for the current output mode.
pub fn create_indicator(show: bool) -> Box<dyn ProgressIndicator> {
    if show {
        Box::new(SpinnerIndicator::new())
    } else {
        Box::new(HiddenIndicator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_indicator_records_calls() {
        let mut indicator = MockIndicator::new();
        indicator.set_indeterminate(true);
        indicator.set_text("Setting up language server...");
        indicator.set_text("Installing");
        indicator.finish();

        assert!(indicator.indeterminate);
        assert_eq!(indicator.texts.len(), 2);
        assert_eq!(indicator.last_text(), Some("Installing"));
        assert!(indicator.finished);
    }

    #[test]
    fn spinner_indicator_lifecycle_does_not_panic() {
        let mut spinner = SpinnerIndicator::new();
        spinner.set_indeterminate(true);
        spinner.set_text("working");
        spinner.set_indeterminate(false);
        spinner.finish();
    }

    #[test]
    fn hidden_indicator_is_inert() {
        let mut indicator = create_indicator(false);
        indicator.set_indeterminate(true);
        indicator.set_text("ignored");
        indicator.finish();
    }
}

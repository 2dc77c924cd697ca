//! Terminal output: progress indicators, themes and output modes.

pub mod output;
pub mod progress;
pub mod theme;

pub use output::OutputMode;
pub use progress::{
    create_indicator, HiddenIndicator, MockIndicator, ProgressIndicator, SpinnerIndicator,
};
pub use theme::{should_use_colors, Theme};

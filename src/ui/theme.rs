//! Visual theme and styling.

use console::Style;

/// Styles for terminal summaries.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            key: Style::new().bold(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            key: Style::new(),
            command: Style::new(),
        }
    }

    /// Pick a themed or plain theme based on the environment.
    pub fn for_terminal() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("⚠"), msg)
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }

    /// Format a `key: value` line.
    pub fn format_field(&self, key: &str, value: &str) -> String {
        format!("  {} {}", self.key.apply_to(format!("{}:", key)), value)
    }
}

/// Whether colored output should be used.
///
/// Respects `NO_COLOR` and whether stdout is a terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

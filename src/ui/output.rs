//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Spinner plus a human-readable summary.
    #[default]
    Normal,
    /// Summary only, no spinner.
    Quiet,
    /// Machine-readable JSON on stdout, nothing else.
    Json,
}

impl OutputMode {
    /// Pick a mode from the `--json` and `--quiet` flags; JSON wins.
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            Self::Json
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows a progress spinner.
    pub fn shows_spinner(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode prints JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

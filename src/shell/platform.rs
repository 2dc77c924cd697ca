//! Platform detection for command construction.

/// The platform family that decides how package manager commands are spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Commands are spawned directly with an argument vector.
    Posix,
    /// Commands are wrapped in `cmd /C "<command line>"`.
    Windows,
}

impl Platform {
    /// Detect the platform of the running process.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Classify an OS name; anything mentioning "windows" is Windows.
    pub fn from_os_name(os_name: &str) -> Self {
        if os_name.to_lowercase().contains("windows") {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Check if this is the Windows family.
    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

//! Install status and provisioning outcome types.

use std::fmt;

use super::launch::LaunchCommand;

/// What the presence check found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    /// The required version is installed.
    UpToDate,
    /// Another version is installed.
    Outdated { installed: String },
    /// The package is absent, or the listing could not be read.
    NotInstalled,
}

impl InstallStatus {
    /// Whether an install is needed.
    pub fn needs_install(&self) -> bool {
        !matches!(self, InstallStatus::UpToDate)
    }
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallStatus::UpToDate => write!(f, "up-to-date"),
            InstallStatus::Outdated { installed } => write!(f, "outdated ({})", installed),
            InstallStatus::NotInstalled => write!(f, "not installed"),
        }
    }
}

/// How provisioning ended. The launch command is registered in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Nothing to do; the required version was already present.
    UpToDate,
    /// The install command ran and succeeded.
    Installed,
    /// Checking or installing failed; the server may not start.
    InstallFailed { reason: String },
}

impl ProvisionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ProvisionOutcome::InstallFailed { .. })
    }

    /// Short machine-friendly label.
    pub fn label(&self) -> &'static str {
        match self {
            ProvisionOutcome::UpToDate => "up-to-date",
            ProvisionOutcome::Installed => "installed",
            ProvisionOutcome::InstallFailed { .. } => "install-failed",
        }
    }
}

/// Result of [`Provisioner::ensure_server_available`](super::Provisioner::ensure_server_available).
#[derive(Debug, Clone)]
pub struct Provisioned {
    pub outcome: ProvisionOutcome,
    pub launch: LaunchCommand,
}

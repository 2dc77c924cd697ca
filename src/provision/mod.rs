//! Language server provisioning.
//!
//! The [`Provisioner`] checks whether the pinned package version is
//! installed, installs it when it is not, and registers a launch command
//! with the language-client host.
//!
//! # Modules
//!
//! - [`provisioner`] - The check/install/register sequence
//! - [`target`] - Package/version and install location types
//! - [`launch`] - Launch command and entry point construction
//! - [`status`] - Install status and provisioning outcome
//!
//! # Example
//!
//! ```
//! use prisma_ls_bootstrap::config::ProvisionConfig;
//! use prisma_ls_bootstrap::host::ServerRegistry;
//! use prisma_ls_bootstrap::log::RecordingLog;
//! use prisma_ls_bootstrap::provision::{InstallLocation, Provisioner, ProvisionOutcome};
//! use prisma_ls_bootstrap::shell::{ScriptedResponse, ScriptedRunner};
//! use prisma_ls_bootstrap::ui::HiddenIndicator;
//!
//! let mut runner = ScriptedRunner::new();
//! runner.respond_to("list", ScriptedResponse::exit(0, "{}"));
//! let mut log = RecordingLog::new();
//! let mut host = ServerRegistry::new();
//!
//! let provisioned = Provisioner::new(&ProvisionConfig::default(), &mut runner, &mut log)
//!     .ensure_server_available(&InstallLocation::Global, &mut HiddenIndicator, &mut host);
//!
//! assert_eq!(provisioned.outcome, ProvisionOutcome::Installed);
//! assert!(host.get("prisma").is_some());
//! ```

pub mod launch;
pub mod provisioner;
pub mod status;
pub mod target;

pub use launch::{entry_point_path, LaunchCommand, STDIO_FLAG};
pub use provisioner::Provisioner;
pub use status::{InstallStatus, ProvisionOutcome, Provisioned};
pub use target::{InstallLocation, InstallTarget};

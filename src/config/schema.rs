//! Configuration schema.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock Prisma language server setup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::provision::{InstallLocation, InstallTarget};

/// Package that provides the language server.
pub const DEFAULT_PACKAGE: &str = "@prisma/language-server";

/// Version the plugin is pinned to.
pub const DEFAULT_VERSION: &str = "3.0.28";

/// Identifier the server is registered under.
pub const DEFAULT_SERVER_ID: &str = "prisma";

/// Subdirectory of the plugin home holding the local install.
pub const DEFAULT_INSTALL_SUBDIR: &str = "language_server";

/// Entry point inside the installed package.
pub const DEFAULT_ENTRY_POINT: &str = "dist/src/cli.js";

/// Executable npm links for a global install.
pub const DEFAULT_GLOBAL_BIN: &str = "prisma-language-server";

/// Initialize handshake timeout, in seconds.
pub const DEFAULT_INIT_TIMEOUT_SECS: u64 = 120;

/// Provisioning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProvisionConfig {
    /// npm package name, optionally scoped.
    pub package: String,

    /// Exact version required.
    pub version: String,

    /// Identifier handed to the language-client host.
    pub server_id: String,

    /// Package manager executable.
    pub package_manager: String,

    /// Interpreter that runs the entry point.
    pub interpreter: String,

    /// Plugin home directory (defaults to the current directory).
    pub plugin_home: Option<PathBuf>,

    /// Install directory, relative to the plugin home.
    pub install_subdir: String,

    /// Check and install globally instead of in the plugin home.
    pub global: bool,

    /// Entry point path inside the package directory.
    pub entry_point: String,

    /// Executable used to launch a globally installed server.
    pub global_bin: String,

    /// Initialize handshake timeout in seconds.
    pub init_timeout_secs: u64,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            server_id: DEFAULT_SERVER_ID.to_string(),
            package_manager: "npm".to_string(),
            interpreter: "node".to_string(),
            plugin_home: None,
            install_subdir: DEFAULT_INSTALL_SUBDIR.to_string(),
            global: false,
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            global_bin: DEFAULT_GLOBAL_BIN.to_string(),
            init_timeout_secs: DEFAULT_INIT_TIMEOUT_SECS,
        }
    }
}

impl ProvisionConfig {
    /// The package and version to provision.
    pub fn target(&self) -> InstallTarget {
        InstallTarget::new(&self.package, &self.version)
    }

    /// Where to check and install, resolving the plugin home against `cwd`.
    pub fn location(&self, cwd: &Path) -> InstallLocation {
        if self.global {
            return InstallLocation::Global;
        }
        let home = match &self.plugin_home {
            Some(home) if home.is_absolute() => home.clone(),
            Some(home) => cwd.join(home),
            None => cwd.to_path_buf(),
        };
        InstallLocation::Local(home.join(&self.install_subdir))
    }

    /// Initialize handshake timeout.
    pub fn init_timeout(&self) -> Duration {
        Duration::from_secs(self.init_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pinned_server() {
        let config = ProvisionConfig::default();
        assert_eq!(config.package, "@prisma/language-server");
        assert_eq!(config.version, "3.0.28");
        assert_eq!(config.server_id, "prisma");
        assert_eq!(config.init_timeout(), Duration::from_secs(120));
        assert!(!config.global);
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: ProvisionConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ProvisionConfig::default());
    }

    #[test]
    fn partial_yaml_overrides_fields() {
        let config: ProvisionConfig =
            serde_yaml::from_str("version: 4.0.0\ninit_timeout_secs: 30\n").unwrap();
        assert_eq!(config.version, "4.0.0");
        assert_eq!(config.init_timeout_secs, 30);
        assert_eq!(config.package, DEFAULT_PACKAGE);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<ProvisionConfig, _> = serde_yaml::from_str("pakage: typo\n");
        assert!(result.is_err());
    }

    #[test]
    fn location_defaults_to_cwd_subdir() {
        let config = ProvisionConfig::default();
        let location = config.location(Path::new("/plugins/prisma"));
        assert_eq!(
            location,
            InstallLocation::Local(PathBuf::from("/plugins/prisma/language_server"))
        );
    }

    #[test]
    fn relative_plugin_home_resolves_against_cwd() {
        let config = ProvisionConfig {
            plugin_home: Some(PathBuf::from("plugins/prisma")),
            ..Default::default()
        };
        let location = config.location(Path::new("/ide"));
        assert_eq!(
            location,
            InstallLocation::Local(PathBuf::from("/ide/plugins/prisma/language_server"))
        );
    }

    #[test]
    fn global_flag_ignores_plugin_home() {
        let config = ProvisionConfig {
            global: true,
            plugin_home: Some(PathBuf::from("/plugins/prisma")),
            ..Default::default()
        };
        assert_eq!(config.location(Path::new("/ide")), InstallLocation::Global);
    }

    #[test]
    fn target_uses_package_and_version() {
        let target = ProvisionConfig::default().target();
        assert_eq!(target.spec(), "@prisma/language-server@3.0.28");
    }
}

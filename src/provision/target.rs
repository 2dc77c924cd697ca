//! What to install and where.

use std::fmt;
use std::path::{Path, PathBuf};

/// A package pinned to an exact version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub package: String,
    pub version: String,
}

impl InstallTarget {
    pub fn new(package: &str, version: &str) -> Self {
        Self {
            package: package.to_string(),
            version: version.to_string(),
        }
    }

    /// `package@version`, as passed to the install command.
    pub fn spec(&self) -> String {
        format!("{}@{}", self.package, self.version)
    }
}

impl fmt::Display for InstallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec())
    }
}

/// Where the package is checked for and installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallLocation {
    /// A directory owned by the plugin, created on demand.
    Local(PathBuf),
    /// The package manager's global prefix.
    Global,
}

impl InstallLocation {
    /// The install directory, or None for a global install.
    pub fn dir(&self) -> Option<&Path> {
        match self {
            InstallLocation::Local(dir) => Some(dir),
            InstallLocation::Global => None,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, InstallLocation::Global)
    }
}

impl fmt::Display for InstallLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallLocation::Local(dir) => write!(f, "{}", dir.display()),
            InstallLocation::Global => write!(f, "global"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_joins_package_and_version() {
        let target = InstallTarget::new("@prisma/language-server", "3.0.28");
        assert_eq!(target.spec(), "@prisma/language-server@3.0.28");
        assert_eq!(target.to_string(), target.spec());
    }

    #[test]
    fn local_location_exposes_dir() {
        let location = InstallLocation::Local(PathBuf::from("/plugins/prisma/language_server"));
        assert_eq!(
            location.dir(),
            Some(Path::new("/plugins/prisma/language_server"))
        );
        assert!(!location.is_global());
    }

    #[test]
    fn global_location_has_no_dir() {
        assert_eq!(InstallLocation::Global.dir(), None);
        assert!(InstallLocation::Global.is_global());
        assert_eq!(InstallLocation::Global.to_string(), "global");
    }
}

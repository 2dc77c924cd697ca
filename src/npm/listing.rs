//! Parsing of `npm list --depth=0 -json` output.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{BootstrapError, Result};

/// One top-level dependency reported by the listing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackageRecord {
    /// Package name, including any scope (e.g. `@prisma/language-server`).
    pub name: String,
    /// Installed version string.
    pub version: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    dependencies: BTreeMap<String, ListedDependency>,
}

// npm emits more fields (resolved, overridden, ...); only version matters.
#[derive(Debug, Deserialize)]
struct ListedDependency {
    #[serde(default)]
    version: Option<String>,
}

/// Parse listing output into installed package records.
///
/// Dependencies npm reports without a version (missing or invalid entries)
/// are skipped. An object without a `dependencies` key is an empty listing.
pub fn parse_listing(json: &str) -> Result<Vec<InstalledPackageRecord>> {
    let listing: Listing =
        serde_json::from_str(json).map_err(|e| BootstrapError::ListingParseError {
            message: e.to_string(),
        })?;

    Ok(listing
        .dependencies
        .into_iter()
        .filter_map(|(name, dep)| {
            dep.version
                .map(|version| InstalledPackageRecord { name, version })
        })
        .collect())
}

/// Find the installed version of `package` among `records`.
pub fn installed_version<'a>(
    records: &'a [InstalledPackageRecord],
    package: &str,
) -> Option<&'a str> {
    records
        .iter()
        .find(|record| record.name == package)
        .map(|record| record.version.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCAL_LISTING: &str = r#"{
        "version": "1.0.0",
        "name": "language_server",
        "dependencies": {
            "@prisma/language-server": {
                "version": "3.0.28",
                "resolved": "https://registry.npmjs.org/@prisma/language-server/-/language-server-3.0.28.tgz",
                "overridden": false
            },
            "typescript": { "version": "5.4.5" }
        }
    }"#;

    #[test]
    fn parses_dependency_versions() {
        let records = parse_listing(LOCAL_LISTING).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            installed_version(&records, "@prisma/language-server"),
            Some("3.0.28")
        );
        assert_eq!(installed_version(&records, "typescript"), Some("5.4.5"));
    }

    #[test]
    fn missing_dependencies_key_is_empty() {
        let records = parse_listing(r#"{ "name": "language_server" }"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn empty_object_is_empty() {
        assert!(parse_listing("{}").unwrap().is_empty());
    }

    #[test]
    fn dependency_without_version_is_skipped() {
        let json = r#"{
            "dependencies": {
                "@prisma/language-server": { "missing": true, "required": "3.0.28" }
            }
        }"#;
        let records = parse_listing(json).unwrap();
        assert_eq!(installed_version(&records, "@prisma/language-server"), None);
    }

    #[test]
    fn malformed_output_is_parse_error() {
        let err = parse_listing("npm ERR! code ELSPROBLEMS").unwrap_err();
        assert!(matches!(err, BootstrapError::ListingParseError { .. }));
    }

    #[test]
    fn empty_output_is_parse_error() {
        assert!(parse_listing("").is_err());
    }

    #[test]
    fn installed_version_is_exact_name_match() {
        let records = parse_listing(LOCAL_LISTING).unwrap();
        assert_eq!(installed_version(&records, "@prisma/language"), None);
        assert_eq!(installed_version(&records, "language-server"), None);
    }
}

//! Package manager interaction: command construction and listing parsing.
//!
//! # Modules
//!
//! - [`commands`] - Listing and install command lines per platform
//! - [`listing`] - Parsing of the JSON dependency listing

pub mod commands;
pub mod listing;

pub use commands::PackageManagerCommands;
pub use listing::{installed_version, parse_listing, InstalledPackageRecord};

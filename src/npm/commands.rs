//! Package manager command construction.
//!
//! Both commands come in four shapes: local or global scope, crossed with
//! a direct argv (POSIX) or a `cmd /C` wrapped command line (Windows).

use std::path::Path;

use crate::shell::{CommandSpec, Platform};

/// Builds listing and install commands for one package manager.
#[derive(Debug, Clone)]
pub struct PackageManagerCommands {
    program: String,
    platform: Platform,
}

impl PackageManagerCommands {
    /// Commands for `program` (usually `npm`) on `platform`.
    pub fn new(program: &str, platform: Platform) -> Self {
        Self {
            program: program.to_string(),
            platform,
        }
    }

    /// `<pm> [-g] list --depth=0 -json`, run in `dir` unless global.
    pub fn list(&self, dir: Option<&Path>) -> CommandSpec {
        self.build(&["list", "--depth=0", "-json"], dir)
    }

    /// `<pm> [-g] install <package>@<version>`, run in `dir` unless global.
    pub fn install(&self, package: &str, version: &str, dir: Option<&Path>) -> CommandSpec {
        let spec = format!("{}@{}", package, version);
        self.build(&["install", &spec], dir)
    }

    fn build(&self, subcommand: &[&str], dir: Option<&Path>) -> CommandSpec {
        let mut words: Vec<&str> = vec![self.program.as_str()];
        if dir.is_none() {
            words.push("-g");
        }
        words.extend_from_slice(subcommand);

        let spec = match self.platform {
            Platform::Posix => CommandSpec::new(words[0]).args(words[1..].iter().copied()),
            Platform::Windows => CommandSpec::new("cmd").args(["/C".to_string(), words.join(" ")]),
        };

        match dir {
            Some(dir) => spec.current_dir(dir),
            None => spec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn posix() -> PackageManagerCommands {
        PackageManagerCommands::new("npm", Platform::Posix)
    }

    fn windows() -> PackageManagerCommands {
        PackageManagerCommands::new("npm", Platform::Windows)
    }

    #[test]
    fn posix_local_list() {
        let dir = PathBuf::from("/plugins/prisma/language_server");
        let spec = posix().list(Some(&dir));

        assert_eq!(spec.argv(), vec!["npm", "list", "--depth=0", "-json"]);
        assert_eq!(spec.cwd, Some(dir));
    }

    #[test]
    fn posix_global_list() {
        let spec = posix().list(None);

        assert_eq!(spec.argv(), vec!["npm", "-g", "list", "--depth=0", "-json"]);
        assert_eq!(spec.cwd, None);
    }

    #[test]
    fn posix_local_install() {
        let dir = PathBuf::from("/plugins/prisma/language_server");
        let spec = posix().install("@prisma/language-server", "3.0.28", Some(&dir));

        assert_eq!(
            spec.argv(),
            vec!["npm", "install", "@prisma/language-server@3.0.28"]
        );
        assert_eq!(spec.cwd, Some(dir));
    }

    #[test]
    fn posix_global_install() {
        let spec = posix().install("@prisma/language-server", "3.0.28", None);
        assert_eq!(
            spec.argv(),
            vec!["npm", "-g", "install", "@prisma/language-server@3.0.28"]
        );
    }

    #[test]
    fn windows_wraps_in_cmd() {
        let dir = PathBuf::from(r"C:\plugins\prisma\language_server");
        let spec = windows().list(Some(&dir));

        assert_eq!(spec.argv(), vec!["cmd", "/C", "npm list --depth=0 -json"]);
        assert_eq!(spec.cwd, Some(dir));
    }

    #[test]
    fn windows_global_install() {
        let spec = windows().install("@prisma/language-server", "3.0.28", None);
        assert_eq!(
            spec.argv(),
            vec!["cmd", "/C", "npm -g install @prisma/language-server@3.0.28"]
        );
    }

    #[test]
    fn custom_program_is_used() {
        let spec = PackageManagerCommands::new("pnpm", Platform::Posix).list(None);
        assert_eq!(spec.program, "pnpm");
    }
}

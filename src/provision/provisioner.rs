//! The startup provisioning sequence.
//!
//! `check → install if needed → register launch command`, each step a
//! blocking package manager invocation with no retry. Process and IO
//! errors never escape [`Provisioner::ensure_server_available`]; they are
//! logged and reported through [`ProvisionOutcome`].

use std::fs;
use std::time::Duration;

use crate::config::ProvisionConfig;
use crate::error::{BootstrapError, Result};
use crate::host::{LanguageClientHost, ServerDefinition};
use crate::log::ProvisionLog;
use crate::npm::{installed_version, parse_listing, PackageManagerCommands};
use crate::shell::{Platform, ProcessRunner};
use crate::ui::ProgressIndicator;

use super::launch::LaunchCommand;
use super::status::{InstallStatus, ProvisionOutcome, Provisioned};
use super::target::{InstallLocation, InstallTarget};

/// Ensures the language server package is installed and registers it.
pub struct Provisioner<'a> {
    target: InstallTarget,
    server_id: String,
    interpreter: String,
    entry_point: String,
    global_bin: String,
    init_timeout: Duration,
    platform: Platform,
    commands: PackageManagerCommands,
    runner: &'a mut dyn ProcessRunner,
    log: &'a mut dyn ProvisionLog,
}

impl<'a> Provisioner<'a> {
    /// Create a provisioner for the running platform.
    pub fn new(
        config: &ProvisionConfig,
        runner: &'a mut dyn ProcessRunner,
        log: &'a mut dyn ProvisionLog,
    ) -> Self {
        Self::with_platform(config, Platform::detect(), runner, log)
    }

    /// Create a provisioner that builds commands for `platform`.
    pub fn with_platform(
        config: &ProvisionConfig,
        platform: Platform,
        runner: &'a mut dyn ProcessRunner,
        log: &'a mut dyn ProvisionLog,
    ) -> Self {
        Self {
            target: config.target(),
            server_id: config.server_id.clone(),
            interpreter: config.interpreter.clone(),
            entry_point: config.entry_point.clone(),
            global_bin: config.global_bin.clone(),
            init_timeout: config.init_timeout(),
            platform,
            commands: PackageManagerCommands::new(&config.package_manager, platform),
            runner,
            log,
        }
    }

    /// Make sure the server is installed, then register its launch command.
    ///
    /// Registration happens whatever the outcome; a failed install only
    /// means the host may fail to start the server.
    pub fn ensure_server_available(
        &mut self,
        location: &InstallLocation,
        progress: &mut dyn ProgressIndicator,
        host: &mut dyn LanguageClientHost,
    ) -> Provisioned {
        progress.set_indeterminate(true);
        progress.set_text("Setting up language server...");
        self.log.debug(&format!("Installing in directory: {}", location));

        let outcome = match self.provision(location, progress) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.log.error(&e.to_string());
                ProvisionOutcome::InstallFailed {
                    reason: e.to_string(),
                }
            }
        };

        let launch = self.launch_command(location);
        self.log.info(&format!("Launch command: {}", launch));

        host.set_init_timeout(self.init_timeout);
        host.add_server_definition(ServerDefinition {
            id: self.server_id.clone(),
            command: launch.argv().to_vec(),
            init_timeout: self.init_timeout,
        });

        progress.finish();
        Provisioned { outcome, launch }
    }

    fn provision(
        &mut self,
        location: &InstallLocation,
        progress: &mut dyn ProgressIndicator,
    ) -> Result<ProvisionOutcome> {
        if !self.check_installed(location)?.needs_install() {
            return Ok(ProvisionOutcome::UpToDate);
        }

        self.log.debug("Language server not installed/up to date, installing...");
        progress.set_text(&format!("Installing {}...", self.target));

        self.install(location)?;
        Ok(ProvisionOutcome::Installed)
    }

    /// Check whether the required version is installed at `location`.
    ///
    /// A missing install directory short-circuits without spawning anything.
    /// A failing listing command or unreadable output counts as not installed.
    pub fn check_installed(&mut self, location: &InstallLocation) -> Result<InstallStatus> {
        if let InstallLocation::Local(dir) = location {
            if !dir.exists() {
                self.log.debug(&format!("{} does not exist yet", dir.display()));
                return Ok(InstallStatus::NotInstalled);
            }
        }

        let spec = self.commands.list(location.dir());
        let result = self.runner.run(&spec)?;

        if !result.success {
            self.log.error(&format!(
                "Listing installed packages failed (exit code {:?}): {}",
                result.exit_code, spec
            ));
            return Ok(InstallStatus::NotInstalled);
        }

        let records = match parse_listing(&result.stdout) {
            Ok(records) => records,
            Err(e) => {
                self.log.error(&e.to_string());
                return Ok(InstallStatus::NotInstalled);
            }
        };

        let Some(installed) = installed_version(&records, &self.target.package) else {
            return Ok(InstallStatus::NotInstalled);
        };

        self.log.debug(&format!(
            "Found installation of {}! Version: {}",
            self.target.package, installed
        ));

        if installed == self.target.version {
            Ok(InstallStatus::UpToDate)
        } else {
            Ok(InstallStatus::Outdated {
                installed: installed.to_string(),
            })
        }
    }

    /// Install the required version at `location`, creating the directory.
    ///
    /// A non-zero exit is returned as `CommandFailed`.
    pub fn install(&mut self, location: &InstallLocation) -> Result<()> {
        if let InstallLocation::Local(dir) = location {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let spec = self
            .commands
            .install(&self.target.package, &self.target.version, location.dir());
        let result = self.runner.run(&spec)?;

        if !result.success {
            return Err(BootstrapError::CommandFailed {
                command: spec.to_string(),
                code: result.exit_code,
            });
        }

        self.log.debug(&format!("Installed {}", self.target));
        Ok(())
    }

    /// The launch command for `location`. Never touches the package manager.
    pub fn launch_command(&self, location: &InstallLocation) -> LaunchCommand {
        LaunchCommand::for_location(
            location,
            &self.interpreter,
            &self.target.package,
            &self.entry_point,
            &self.global_bin,
            self.platform,
        )
    }
}

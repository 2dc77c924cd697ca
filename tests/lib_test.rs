//! Library integration tests.

use prisma_ls_bootstrap::BootstrapError;

#[test]
fn error_types_are_public() {
    let err = BootstrapError::ConfigValidationError {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> prisma_ls_bootstrap::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use prisma_ls_bootstrap::cli::{Cli, Commands};

    let cli = Cli::parse_from(["prisma-ls-bootstrap", "status", "--json"]);

    if let Commands::Status(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Status command");
    }
}

#[test]
fn stock_config_is_valid() {
    use prisma_ls_bootstrap::config::{validate, ProvisionConfig};

    assert!(validate(&ProvisionConfig::default()).is_ok());
}

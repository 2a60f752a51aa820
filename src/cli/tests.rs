//! Unit tests for CLI commands
#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_generate_without_arguments() {
    let cli = Cli::try_parse_from(["apispec-gen", "generate"]).unwrap();

    match cli.command {
        Commands::Generate { source, output } => {
            assert!(source.config.is_none());
            assert!(source.registry.is_none());
            assert!(!source.legacy_security_key);
            assert!(output.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
    assert!(!cli.verbose);
}

#[test]
fn test_generate_with_flags() {
    let cli = Cli::try_parse_from([
        "apispec-gen",
        "generate",
        "--registry",
        "api.yml",
        "--output",
        "out.json",
        "--legacy-security-key",
        "-v",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate { source, output } => {
            assert_eq!(source.registry.unwrap().to_string_lossy(), "api.yml");
            assert_eq!(output.unwrap().to_string_lossy(), "out.json");
            assert!(source.legacy_security_key);
        }
        _ => panic!("Expected Generate command"),
    }
    assert!(cli.verbose);
}

#[test]
fn test_print_has_no_output_flag() {
    assert!(Cli::try_parse_from(["apispec-gen", "print", "--output", "x.json"]).is_err());
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["apispec-gen", "generate"],
        vec!["apispec-gen", "check", "--config", "apispec.toml"],
        vec!["apispec-gen", "print", "-r", "api.yml"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}

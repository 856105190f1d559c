//! Tests for CLI argument parsing.

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from_iter(["netgear-presence", "--password", "secret"]);

        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_router_options() {
        let cli = Cli::parse_from_iter([
            "netgear-presence",
            "--host",
            "10.0.0.1",
            "--port",
            "80",
            "--username",
            "root",
            "--password",
            "hunter2",
            "--session-id",
            "0123456789ABCDEF0123",
        ]);

        assert_eq!(cli.host.as_deref(), Some("10.0.0.1"));
        assert_eq!(cli.port, Some(80));
        assert_eq!(cli.username.as_deref(), Some("root"));
        assert_eq!(cli.password.as_deref(), Some("hunter2"));
        assert_eq!(cli.session_id.as_deref(), Some("0123456789ABCDEF0123"));
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from_iter([
            "netgear-presence",
            "-u",
            "root",
            "-p",
            "pw",
            "-c",
            "router.toml",
            "-v",
        ]);

        assert_eq!(cli.username.as_deref(), Some("root"));
        assert_eq!(cli.password.as_deref(), Some("pw"));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("router.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_poll_interval() {
        let cli = Cli::parse_from_iter(["netgear-presence", "--poll-interval", "30"]);

        assert_eq!(cli.poll_interval, Some(30));
    }

    #[test]
    fn invalid_port_is_rejected() {
        use clap::Parser;

        let result = Cli::try_parse_from(["netgear-presence", "--port", "70000"]);

        assert!(result.is_err());
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from_iter(["netgear-presence"]);

        // Optional fields have no defaults in CLI - None when not specified
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.username.is_none());
        assert!(cli.password.is_none());
        assert!(cli.session_id.is_none());
        assert!(cli.poll_interval.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }
}

mod init_command {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["netgear-presence", "init"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("netgear-presence.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli = Cli::parse_from_iter([
            "netgear-presence",
            "init",
            "--output",
            "/custom/path/config.toml",
        ]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("/custom/path/config.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn run_mode_has_no_subcommand() {
        let cli = Cli::parse_from_iter(["netgear-presence", "--password", "pw"]);

        assert!(cli.command.is_none());
    }
}

//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [router]
            password = "secret"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.router.password.as_deref(), Some("secret"));
        assert!(config.router.host.is_none());
    }

    #[test]
    fn parse_full_router_section() {
        let toml = r#"
            [router]
            host = "10.0.0.1"
            port = 80
            username = "root"
            password = "hunter2"
            session_id = "0123456789ABCDEF0123"
        "#;

        let router = TomlConfig::parse(toml).unwrap().router;
        assert_eq!(router.host.as_deref(), Some("10.0.0.1"));
        assert_eq!(router.port, Some(80));
        assert_eq!(router.username.as_deref(), Some("root"));
        assert_eq!(router.password.as_deref(), Some("hunter2"));
        assert_eq!(router.session_id.as_deref(), Some("0123456789ABCDEF0123"));
    }

    #[test]
    fn parse_monitor_section() {
        let toml = r"
            [monitor]
            poll_interval = 30
        ";

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.monitor.poll_interval, Some(30));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.router.host.is_none());
        assert!(config.router.password.is_none());
        assert!(config.monitor.poll_interval.is_none());
    }

    #[test]
    fn reject_out_of_range_port() {
        let toml = r"
            [router]
            port = 70000
        ";

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            [router]
            host = "10.0.0.1"
            unknown_field = "value"
        "#;

        let result = TomlConfig::parse(toml);
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_sections() {
        let toml = r#"
            [unknown_section]
            key = "value"
        "#;

        let result = TomlConfig::parse(toml);
        assert!(result.is_err());
    }
}

mod default_template {
    use super::*;

    #[test]
    fn template_is_valid_toml() {
        let template = default_config_template();
        // Commented-out values don't matter
        let result = TomlConfig::parse(&template);
        assert!(
            result.is_ok(),
            "Template should be valid TOML: {:?}",
            result.err()
        );
    }

    #[test]
    fn template_contains_all_sections() {
        let template = default_config_template();

        assert!(
            template.contains("[router]"),
            "Template should contain router section"
        );
        assert!(
            template.contains("[monitor]"),
            "Template should contain monitor section"
        );
    }

    #[test]
    fn template_documents_every_router_field() {
        let template = default_config_template();

        for key in ["host", "port", "username", "password", "session_id"] {
            assert!(
                template.contains(&format!("# {key} = ")),
                "Template should document {key}"
            );
        }
    }

    #[test]
    fn template_sets_default_poll_interval() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(
            config.monitor.poll_interval,
            Some(crate::config::defaults::POLL_INTERVAL_SECS)
        );
    }
}

mod file_loading {
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [router]
            host = "10.0.0.1"
            password = "pw"
        "#
        )
        .unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert_eq!(config.router.host.as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let path = Path::new("nonexistent_config_file_12345.toml");
        let result = TomlConfig::load(path);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_invalid_toml_file_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let result = TomlConfig::load(file.path());

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

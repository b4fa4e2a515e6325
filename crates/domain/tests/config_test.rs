use ec2_dns_domain::{CliOverrides, Config, ConfigError, LogFormat};
use std::io::Write;
use std::net::SocketAddr;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.dns_port, 1053);
    assert_eq!(config.server.tcp_idle_timeout_secs, 10);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.resolver.path, "/etc/resolver/internal");
    assert_eq!(config.resolver.domain, "internal");
    assert_eq!(config.resolver.timeout_secs, 1);
    assert_eq!(config.resolver.search_order, 1);
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_socket_addr_is_loopback_1053() {
    let addr = Config::default().server.socket_addr().unwrap();
    assert_eq!(addr, "127.0.0.1:1053".parse::<SocketAddr>().unwrap());
}

#[test]
fn test_config_empty_toml_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.server.dns_port, 1053);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_partial_toml() {
    let toml_str = r#"
        [server]
        dns_port = 5353

        [logging]
        level = "debug"
        format = "json"
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.resolver.domain, "internal");
}

#[test]
fn test_config_invalid_toml_is_parse_error() {
    let result = Config::from_toml("[server\ndns_port = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_cli_overrides_take_precedence() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        dns_port: Some(2053),
        bind_address: Some("::1".to_string()),
        log_level: Some("trace".to_string()),
    });

    assert_eq!(config.server.dns_port, 2053);
    assert_eq!(config.server.bind_address, "::1");
    assert_eq!(config.logging.level, "trace");
    assert_eq!(
        config.server.socket_addr().unwrap(),
        "[::1]:2053".parse::<SocketAddr>().unwrap()
    );
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let result = Config::load(
        Some("/nonexistent/ec2-dns/config.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_explicit_file_values_win_over_defaults() {
    let file = write_config(
        r#"
[server]
bind_address = "127.0.0.2"
dns_port = 5300

[logging]
level = "debug"
format = "json"

[resolver]
path = "/tmp/resolver/internal"
"#,
    );

    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();

    assert_eq!(config.server.bind_address, "127.0.0.2");
    assert_eq!(config.server.dns_port, 5300);
    assert_eq!(config.server.tcp_idle_timeout_secs, 10);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.resolver.path, "/tmp/resolver/internal");
    assert_eq!(config.resolver.domain, "internal");
}

#[test]
fn test_load_applies_cli_overrides_on_top_of_file() {
    let file = write_config("[server]\ndns_port = 5300\nbind_address = \"127.0.0.2\"\n");

    let config = Config::load(
        file.path().to_str(),
        CliOverrides {
            dns_port: Some(6000),
            bind_address: None,
            log_level: Some("warn".to_string()),
        },
    )
    .unwrap();

    assert_eq!(config.server.dns_port, 6000);
    assert_eq!(config.server.bind_address, "127.0.0.2");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_load_invalid_explicit_file_is_parse_error() {
    let file = write_config("[server\ndns_port = ");

    let result = Config::load(file.path().to_str(), CliOverrides::default());

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_bad_bind_address() {
    let mut config = Config::default();
    config.server.bind_address = "localhost".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_idle_timeout() {
    let mut config = Config::default();
    config.server.tcp_idle_timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_resolver_domain() {
    let mut config = Config::default();
    config.resolver.domain = "  ".to_string();
    assert!(config.validate().is_err());
}

use age_stats::config::toml_config::TomlConfig;
use age_stats::utils::validation::Validate;
use age_stats::{AgeError, CliConfig, ServerConfig};
use anyhow::Result;
use clap::Parser;
use tempfile::TempDir;

#[test]
fn test_load_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("age-stats.toml");
    std::fs::write(
        &config_path,
        r#"
[server]
host = "127.0.0.1"
port = 8088

[logging]
json = true
"#,
    )?;

    let path = config_path.to_str().unwrap();
    let cli = CliConfig::parse_from(["age-stats", "--config", path]);
    let config = ServerConfig::load(&cli)?;

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8088);
    assert!(config.log_json);
    assert!(!config.verbose);
    config.validate()?;
    assert_eq!(config.socket_addr()?.to_string(), "127.0.0.1:8088");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let cli = CliConfig::parse_from(["age-stats", "--config", "/definitely/not/here.toml"]);
    let err = ServerConfig::load(&cli).unwrap_err();
    assert!(matches!(err, AgeError::IoError(_)));
    assert!(!err.recovery_suggestion().is_empty());
}

#[test]
fn test_invalid_host_in_file_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[server]\nhost = \"not an ip\"\n")?;

    let file = TomlConfig::from_file(&config_path)?;
    let cli = CliConfig::parse_from(["age-stats"]);
    let config = ServerConfig::resolve(&cli, Some(&file));

    assert!(config.validate().is_err());
    Ok(())
}

pub mod toml_config;

use crate::utils::error::{AgeError, Result};
use crate::utils::validation::{validate_host, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "age-stats")]
#[command(about = "HTTP service for age statistics and date compatibility")]
pub struct CliConfig {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Effective settings after merging CLI flags, the TOML file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub verbose: bool,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            verbose: false,
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// 命令列 > TOML > 預設值
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let server = file.map(|f| &f.server);
        let logging = file.map(|f| &f.logging);

        Self {
            host: cli
                .host
                .clone()
                .or_else(|| server.and_then(|s| s.host.clone()))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli
                .port
                .or_else(|| server.and_then(|s| s.port))
                .unwrap_or(DEFAULT_PORT),
            verbose: cli.verbose || logging.and_then(|l| l.verbose).unwrap_or(false),
            log_json: cli.log_json || logging.and_then(|l| l.json).unwrap_or(false),
        }
    }

    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = cli
            .config
            .as_deref()
            .map(TomlConfig::from_file)
            .transpose()?;
        Ok(Self::resolve(cli, file.as_ref()))
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e| AgeError::ConfigError {
            message: format!("invalid host {}: {}", self.host, e),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_host("server.host", &self.host)?;
        validate_range("server.port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}

// src/config.rs - Optional TOML config and its discovery

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CmdpadConfig {
    pub server: ServerSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: IpAddr,
    pub port: u16,
    pub enabled: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            enabled: true,
        }
    }
}

impl ServerSection {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CmdpadConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("cmdpad")
}

pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(&get_config_dir(), dirs::home_dir().as_deref())
}

/// Looks for `config.toml` in `config_dir`, then in `<home>/.cmdpad`.
pub fn find_config_file_in(config_dir: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let mut paths = vec![config_dir.join("config.toml")];
    if let Some(home) = home {
        paths.push(home.join(".cmdpad").join("config.toml"));
    }

    paths.into_iter().find(|p| p.exists())
}

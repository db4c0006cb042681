use crate::config::{self, CmdpadConfig, ConfigError};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "cmdpad")]
#[command(version = "0.1.0")]
#[command(about = "A text buffer with undo, driven from a prompt and over HTTP")]
pub struct CliArgs {
    /// Config file (defaults to <config dir>/cmdpad/config.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Address for the HTTP server to listen on
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port for the HTTP server
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Run the prompt only, without the HTTP server
    #[arg(long)]
    pub no_server: bool,
}

/// Settings after merging command line, config file, and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// `None` when the HTTP server is disabled
    pub server_addr: Option<SocketAddr>,
}

impl CliArgs {
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::find_config_file)
    }

    /// Command line flags win over the config file.
    pub fn settings(&self, file: &CmdpadConfig) -> Settings {
        let server = &file.server;
        let enabled = server.enabled && !self.no_server;
        let addr = SocketAddr::new(
            self.host.unwrap_or(server.host),
            self.port.unwrap_or(server.port),
        );
        Settings {
            server_addr: enabled.then_some(addr),
        }
    }

    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        let file = match self.config_path() {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                CmdpadConfig::from_file(&path)?
            }
            None => CmdpadConfig::default(),
        };
        Ok(self.settings(&file))
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

// Command-line arguments

use anyhow::Result;
use clap::Parser;
use ensime_debug_client::paths;
use ensime_debug_client::ClientConfig;
use std::path::PathBuf;

/// Line-delimited JSON bridge between an editor and the ENSIME debugger
#[derive(Parser, Debug)]
#[command(name = "ensime-debug-bridge")]
#[command(version)]
pub struct Cli {
    /// JSON config file (keys: root-dir, attach-host, attach-port)
    #[arg(short, long, env = "ENSIME_DEBUG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root used to resolve breakpoint paths
    #[arg(short, long)]
    pub root_dir: Option<PathBuf>,

    /// Default attach host
    #[arg(long)]
    pub host: Option<String>,

    /// Default attach port
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Config file values overridden by flags, with an absolute root
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };

        if let Some(root) = &self.root_dir {
            config.root_dir = root.clone();
        }
        if let Some(host) = &self.host {
            config.attach_host = host.clone();
        }
        if let Some(port) = self.port {
            config.attach_port = port;
        }

        if config.root_dir.is_relative() {
            config.root_dir = std::env::current_dir()?.join(&config.root_dir);
        }
        config.root_dir = paths::clean(&config.root_dir);

        Ok(config)
    }
}

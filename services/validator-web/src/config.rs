use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    /// Human-readable logs and a `debug` default filter.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = lookup("VALIDATOR_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("VALIDATOR_LISTEN_ADDR must be a socket address (example: 0.0.0.0:5000).")?;

        let debug = lookup("VALIDATOR_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_level = lookup("VALIDATOR_LOG_LEVEL").unwrap_or_else(|| {
            if debug { "debug" } else { "info" }.to_string()
        });

        Ok(Self {
            listen_addr,
            log_level,
            debug,
        })
    }
}

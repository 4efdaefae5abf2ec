use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Receive timeout for one read from the client, in milliseconds.
    pub recv_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            recv_timeout_ms: 2000,
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by the `CONFIG` env var,
    /// falling back to defaults. `LISTEN` overrides the listen address either
    /// way.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {}", path))?
            }
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn recv_timeout(&self) -> Duration {
        Duration::from_millis(self.server.recv_timeout_ms)
    }
}

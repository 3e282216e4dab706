use serde::Deserialize;

/// Server configuration, loaded from an optional YAML file with environment
/// overrides.
///
/// The file path comes from the `STATICD_CONFIG` env var (default
/// `staticd.yaml`). A missing file yields the defaults; a file that exists
/// but fails to parse is a fatal startup error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub connection: ConnectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,
    /// Listen queue depth passed to the socket.
    pub backlog: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Receive buffer capacity. The request line must arrive within a
    /// single read of this many bytes.
    pub max_request_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            connection: ConnectionConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            backlog: 10,
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_request_bytes: 8192,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("STATICD_CONFIG")
            .unwrap_or_else(|_| "staticd.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_yaml(&text)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}

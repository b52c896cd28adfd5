//! Go App configuration loaded from environment variables.

use serde::Deserialize;

/// Port used when `PORT` is absent or empty.
pub const DEFAULT_PORT: &str = "8080";

/// Go App configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Listening port. Kept as raw text; it is spliced into the bind address
    /// unvalidated.
    #[serde(default)]
    pub port: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Build configuration from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Resolve the listening port, falling back to [`DEFAULT_PORT`].
    pub fn resolve_port(&self) -> &str {
        match self.port.as_deref() {
            Some(port) if !port.is_empty() => port,
            _ => DEFAULT_PORT,
        }
    }

    /// Address handed to the listener.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.resolve_port())
    }
}

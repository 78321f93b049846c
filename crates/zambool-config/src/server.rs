use std::env;
use std::net::SocketAddr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory for rolling JSON log files.
    pub log_dir: String,
    pub observability_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            log_dir: "storage/logs".to_string(),
            observability_enabled: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            observability_enabled: env::var("OBSERVABILITY_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.observability_enabled),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Anything but `false`/`0`/`off`/`no` (any case) counts as enabled.
pub(crate) fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "off" | "no"
    )
}

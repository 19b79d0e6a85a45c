//! Configuration management for the server.
//!
//! Settings are read once at startup from environment variables (optionally
//! seeded from a `.env` file) and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Product name used when `APP_NAME` is not set.
pub const DEFAULT_APP_NAME: &str = "Simple Context Coach";

/// Host used when `APP_HOST` is not set.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port used when `APP_PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Runtime settings shared by the server and the manifest builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Display name of the App.
    pub app_name: String,

    /// Interface the HTTP server binds to.
    pub host: String,

    /// Port the HTTP server listens on.
    pub port: u16,

    /// URL clients use to reach the server.
    pub public_url: String,
}

impl Settings {
    /// Settings for the given host and port, with the derived public URL.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let host = host.into();
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            public_url: format!("http://{}:{}", host, port),
            host,
            port,
        }
    }

    /// Read settings through a key lookup.
    ///
    /// `APP_PUBLIC_URL` defaults to `http://{host}:{port}` using the
    /// resolved host and port.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::config(format!("invalid APP_PORT {:?}: {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let mut settings = Self::new(host, port);
        if let Some(public_url) = lookup("APP_PUBLIC_URL") {
            settings.public_url = public_url;
        }
        if let Some(name) = lookup("APP_NAME") {
            settings.app_name = name;
        }

        Ok(settings)
    }

    /// The `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Environment variables that reproduce these settings (for CI/CD).
    pub fn to_env(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("APP_HOST".to_string(), self.host.clone()),
            ("APP_PORT".to_string(), self.port.to_string()),
            ("APP_PUBLIC_URL".to_string(), self.public_url.clone()),
        ])
    }

    /// `to_env` as pretty JSON, as printed by `appsdk env`.
    pub fn to_env_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_env())?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// App identity and network settings.
    pub settings: Settings,

    /// The version of the server.
    pub version: String,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

impl Default for Config {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            transport: TransportConfig::for_settings(&settings),
            settings,
            version: env!("CARGO_PKG_VERSION").to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory (or a parent) is loaded first;
    /// variables already set in the process environment win.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {}", e),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration through a key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = Settings::from_lookup(&lookup)?;
        let transport = TransportConfig::from_lookup(&lookup, &settings);

        let mut logging = LoggingConfig::default();
        if let Some(level) = lookup("APP_LOG_LEVEL") {
            logging.level = level;
        }

        Ok(Self {
            settings,
            version: env!("CARGO_PKG_VERSION").to_string(),
            logging,
            transport,
        })
    }

    /// Override the bind host and port, keeping the transport in sync.
    ///
    /// The public URL is re-derived only if it was still the default for the
    /// previous host and port.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        let derived = format!("http://{}:{}", self.settings.host, self.settings.port);
        let had_default_url = self.settings.public_url == derived;

        if let Some(host) = host {
            self.settings.host = host;
        }
        if let Some(port) = port {
            self.settings.port = port;
        }
        if had_default_url {
            self.settings.public_url =
                format!("http://{}:{}", self.settings.host, self.settings.port);
        }

        self.transport = self.transport.rebind(&self.settings);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.public_url, "http://127.0.0.1:8000");
        assert_eq!(settings.app_name, "Simple Context Coach");
    }

    #[test]
    fn test_public_url_derived_from_host_and_port() {
        let settings =
            Settings::from_lookup(lookup_from(&[("APP_HOST", "0.0.0.0"), ("APP_PORT", "9001")]))
                .unwrap();
        assert_eq!(settings.public_url, "http://0.0.0.0:9001");
    }

    #[test]
    fn test_explicit_public_url_wins() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("APP_PORT", "9001"),
            ("APP_PUBLIC_URL", "https://coach.example.com"),
        ]))
        .unwrap();
        assert_eq!(settings.public_url, "https://coach.example.com");
        assert_eq!(settings.port, 9001);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = Settings::from_lookup(lookup_from(&[("APP_PORT", "eighty")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_to_env() {
        let env = Settings::new("localhost", 8123).to_env();
        assert_eq!(env["APP_HOST"], "localhost");
        assert_eq!(env["APP_PORT"], "8123");
        assert_eq!(env["APP_PUBLIC_URL"], "http://localhost:8123");
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_to_env_key_order() {
        let env = Settings::default().to_env();
        let keys: Vec<&str> = env.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["APP_HOST", "APP_PORT", "APP_PUBLIC_URL"]);
    }

    #[test]
    fn test_to_env_json_printout() {
        let json = Settings::default().to_env_json().unwrap();
        assert_eq!(
            json,
            "{\n  \"APP_HOST\": \"127.0.0.1\",\n  \"APP_PORT\": \"8000\",\n  \"APP_PUBLIC_URL\": \"http://127.0.0.1:8000\"\n}"
        );
    }

    #[test]
    fn test_log_level_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[("APP_LOG_LEVEL", "debug")])).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_with_bind_rederives_default_url() {
        let config = Config::default().with_bind(Some("0.0.0.0".to_string()), Some(9000));
        assert_eq!(config.settings.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.settings.public_url, "http://0.0.0.0:9000");
    }

    #[test]
    fn test_with_bind_keeps_explicit_url() {
        let config = Config::from_lookup(lookup_from(&[(
            "APP_PUBLIC_URL",
            "https://coach.example.com",
        )]))
        .unwrap()
        .with_bind(None, Some(9000));
        assert_eq!(config.settings.public_url, "https://coach.example.com");
    }

    #[test]
    fn test_settings_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("APP_HOST", "10.0.0.5");
            std::env::set_var("APP_PORT", "8443");
            std::env::remove_var("APP_PUBLIC_URL");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.settings.public_url, "http://10.0.0.5:8443");
        unsafe {
            std::env::remove_var("APP_HOST");
            std::env::remove_var("APP_PORT");
        }
    }
}

//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::config::Settings;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (MCP JSON-RPC).
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP transport with the tool catalog endpoints.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// HTTP config bound to the given settings' host and port.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            port: settings.port,
            host: settings.host.clone(),
            enable_cors: default_cors(),
        }
    }

    /// The `host:port` address to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TransportConfig {
    /// The default transport for the given settings.
    ///
    /// HTTP when compiled in, STDIO otherwise.
    #[allow(unused_variables)]
    pub fn for_settings(settings: &Settings) -> Self {
        #[cfg(feature = "http")]
        {
            Self::Http(HttpConfig::from_settings(settings))
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            Self::Stdio
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }

    /// Choose a transport by name (`http` or `stdio`).
    ///
    /// Unknown or disabled names fall back to the default transport.
    pub fn by_name(name: &str, settings: &Settings) -> Self {
        match name.to_lowercase().as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_settings(settings)),
            "" => Self::for_settings(settings),
            other => {
                warn!("Unsupported transport {:?}, using default", other);
                Self::for_settings(settings)
            }
        }
    }

    /// Load transport config through a key lookup.
    ///
    /// Reads `APP_TRANSPORT` and, for HTTP, `APP_HTTP_CORS`.
    pub fn from_lookup<F>(lookup: F, settings: &Settings) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let transport = Self::by_name(&lookup("APP_TRANSPORT").unwrap_or_default(), settings);

        match transport {
            #[cfg(feature = "http")]
            Self::Http(mut cfg) => {
                if let Some(v) = lookup("APP_HTTP_CORS") {
                    cfg.enable_cors = v.to_lowercase() != "false" && v != "0";
                }
                Self::Http(cfg)
            }
            #[allow(unreachable_patterns)]
            other => other,
        }
    }

    /// The same transport kind, re-bound to new settings.
    #[allow(unused_variables)]
    pub fn rebind(self, settings: &Settings) -> Self {
        match self {
            #[cfg(feature = "http")]
            Self::Http(cfg) => Self::Http(HttpConfig {
                enable_cors: cfg.enable_cors,
                ..HttpConfig::from_settings(settings)
            }),
            #[allow(unreachable_patterns)]
            other => other,
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}", cfg.address()),
        }
    }

    /// Check if this transport is the STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

//! Transport layer for the server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: tool catalog endpoints (`/health`, `/mcp/tools`,
//!   `/mcp/tools/invoke`) - feature: `http`
//! - **STDIO**: standard MCP JSON-RPC over stdin/stdout - feature: `stdio`
//!
//! Each transport handles the connection lifecycle and delegates tool
//! discovery and invocation to the shared `McpServer`.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;

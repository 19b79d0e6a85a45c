//! Simple Context Coach
//!
//! A minimal local MCP service exposing a static knowledge base through a
//! discover-then-invoke tool protocol, plus a generator for the App manifest
//! that registers the service with a chat client.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, transports
//! - **domains**: business logic organized by bounded contexts
//!   - **knowledge**: the curated notes and roadmap
//!   - **tools**: tool definitions and the shared registry
//!   - **prompts**: persona prompt and client instructions
//!   - **manifest**: the App manifest builder
//!
//! # Example
//!
//! ```rust,no_run
//! use context_coach_mcp::{Config, McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, Settings};
pub use domains::manifest::{AppManifest, build_manifest, write_manifest};

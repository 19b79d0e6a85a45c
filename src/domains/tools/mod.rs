//! Tools domain module.
//!
//! This module handles all tool-related functionality for the server.
//! Tools are named, schema-described operations that clients discover and
//! then invoke against the knowledge base.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central tool registry, discovery and dispatch
//! - `router.rs` - rmcp ToolRouter built from the registry (STDIO transport)
//! - `types.rs` - Descriptor, schema and invocation wire types
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolDefinition`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;
mod types;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::{RegisteredTool, ToolRegistry, get_all_tools, tool_catalog, tool_names};
pub use router::build_tool_router;
pub use types::{
    Arguments, InputSchema, PropertySchema, ToolDescriptor, ToolInvocation, ToolOutput,
};

//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - Metadata (name, description, input schema)
//! - `execute()` (core logic against the knowledge base)
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`
//!
//! The HTTP catalog, the MCP router and the App manifest all read from the
//! registry, so nothing else needs touching.

pub mod project_notes;
pub mod roadmap_status;

pub use project_notes::ProjectNotesTool;
pub use roadmap_status::RoadmapStatusTool;

use super::error::ToolError;
use super::types::{Arguments, InputSchema, ToolOutput};
use crate::domains::knowledge::KnowledgeBase;

/// Trait for tool definitions.
pub trait ToolDefinition {
    /// The unique name of the tool.
    const NAME: &'static str;

    /// A description of what the tool does.
    const DESCRIPTION: &'static str;

    /// The arguments this tool accepts.
    fn input_schema() -> InputSchema;

    /// Run the tool.
    fn execute(arguments: &Arguments, knowledge: &KnowledgeBase) -> Result<ToolOutput, ToolError>;
}

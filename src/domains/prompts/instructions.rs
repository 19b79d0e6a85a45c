//! Instruction texts shared by the MCP server and the App manifest.

use crate::domains::tools::ToolDefinition;
use crate::domains::tools::definitions::{ProjectNotesTool, RoadmapStatusTool};

/// Persona prompt for the assistant.
pub const SYSTEM_PROMPT: &str = "You are Simple Context Coach, a local MCP service that teaches people how to \
     ship helpful automations. Answer concisely and highlight which tool output \
     you used to solve the request.";

/// Instructions given to the client model, naming every registered tool.
pub fn app_instructions() -> String {
    format!(
        "You introduce yourself as Simple Context Coach. Let users know you can call \
         the {} tool to dig into the curated knowledge base and the {} tool to \
         summarize the current deployment stages.",
        ProjectNotesTool::NAME,
        RoadmapStatusTool::NAME,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::tool_names;

    #[test]
    fn test_instructions_name_every_tool() {
        let instructions = app_instructions();
        for name in tool_names() {
            assert!(instructions.contains(name.as_str()), "missing {name}");
        }
    }
}

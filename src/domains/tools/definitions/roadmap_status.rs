//! Roadmap status tool definition.

use tracing::info;

use super::ToolDefinition;
use crate::domains::knowledge::KnowledgeBase;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::types::{Arguments, InputSchema, ToolOutput};

/// Roadmap status tool - summarizes the next milestones.
pub struct RoadmapStatusTool;

impl ToolDefinition for RoadmapStatusTool {
    const NAME: &'static str = "roadmap_status";
    const DESCRIPTION: &'static str = "Summarize the next milestones for this automation project.";

    fn input_schema() -> InputSchema {
        InputSchema::object()
    }

    fn execute(_arguments: &Arguments, knowledge: &KnowledgeBase) -> Result<ToolOutput, ToolError> {
        info!("Roadmap status requested");
        Ok(ToolOutput::new(knowledge.roadmap_text(), Self::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_joined_in_order() {
        let kb = KnowledgeBase::builtin();
        let output = RoadmapStatusTool::execute(&Arguments::new(), &kb).unwrap();
        let lines: Vec<&str> = output.content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "✅ Local MCP server boots with `appsdk run-server`.",
                "✅ Manifest generation documents the HTTP endpoints exposed to ChatGPT.",
                "🚧 Next: proxy CRM data through a new tool once the API is available.",
            ]
        );
        assert!(!output.content.ends_with('\n'));
        assert_eq!(output.source, "roadmap_status");
    }

    #[test]
    fn test_arguments_are_ignored() {
        let kb = KnowledgeBase::builtin();
        let args = Arguments::from([("topic".to_string(), "anything".to_string())]);
        let with_args = RoadmapStatusTool::execute(&args, &kb).unwrap();
        let without = RoadmapStatusTool::execute(&Arguments::new(), &kb).unwrap();
        assert_eq!(with_args, without);
    }
}

//! Project notes tool definition.
//!
//! Looks up a curated note by topic.

use tracing::{info, instrument, warn};

use super::ToolDefinition;
use crate::domains::knowledge::KnowledgeBase;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::types::{Arguments, InputSchema, ToolOutput};

/// Project notes tool - answers from the curated knowledge base.
pub struct ProjectNotesTool;

impl ProjectNotesTool {
    /// Name of the topic argument.
    pub const TOPIC_ARG: &'static str = "topic";
}

impl ToolDefinition for ProjectNotesTool {
    const NAME: &'static str = "project_notes";
    const DESCRIPTION: &'static str = "Look up curated onboarding, deployment, and backlog notes.";

    fn input_schema() -> InputSchema {
        InputSchema::object().with_required_string(
            Self::TOPIC_ARG,
            "Topic such as onboarding, deployment, or backlog",
        )
    }

    #[instrument(skip_all)]
    fn execute(arguments: &Arguments, knowledge: &KnowledgeBase) -> Result<ToolOutput, ToolError> {
        let topic = arguments
            .get(Self::TOPIC_ARG)
            .map(|t| t.to_lowercase())
            .unwrap_or_default();

        info!("Project notes requested for topic: {:?}", topic);

        match knowledge.note(&topic) {
            Some(text) => Ok(ToolOutput::new(text, Self::NAME)),
            None => {
                warn!("Unknown topic: {:?}", topic);
                Err(ToolError::unknown_topic(topic))
            }
        }
    }
}

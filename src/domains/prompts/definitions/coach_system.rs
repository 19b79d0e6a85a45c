//! Coach system prompt definition.

use super::PromptDefinition;
use crate::domains::prompts::instructions::SYSTEM_PROMPT;

/// The persona the assistant adopts when using this server.
pub struct CoachSystemPrompt;

impl PromptDefinition for CoachSystemPrompt {
    const NAME: &'static str = "coach_system";
    const DESCRIPTION: &'static str = "System prompt for the Simple Context Coach persona";

    fn text() -> String {
        SYSTEM_PROMPT.to_string()
    }
}

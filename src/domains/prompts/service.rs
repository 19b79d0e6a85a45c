//! Prompt service implementation.
//!
//! Lists registered prompts and renders them as MCP prompt results.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::BTreeMap;
use tracing::info;

use super::error::PromptError;
use super::registry::{PromptEntry, get_all_prompts};

/// Service for listing and fetching prompts.
pub struct PromptService {
    /// Key: prompt name.
    prompts: BTreeMap<String, PromptEntry>,
}

impl PromptService {
    pub fn new() -> Self {
        info!("Initializing PromptService");
        Self {
            prompts: get_all_prompts()
                .into_iter()
                .map(|entry| (entry.name.clone(), entry))
                .collect(),
        }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|entry| Prompt {
                name: entry.name.clone(),
                title: None,
                description: Some(entry.description.clone()),
                arguments: None,
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt by name.
    pub async fn get_prompt(&self, name: &str) -> Result<GetPromptResult, PromptError> {
        let entry = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        Ok(GetPromptResult {
            description: Some(entry.description.clone()),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                entry.text.clone(),
            )],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{CoachSystemPrompt, PromptDefinition};

/// A registered prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEntry {
    pub name: String,
    pub description: String,
    pub text: String,
}

/// Build a PromptEntry from a PromptDefinition.
fn build_entry<P: PromptDefinition>() -> PromptEntry {
    PromptEntry {
        name: P::NAME.to_string(),
        description: P::DESCRIPTION.to_string(),
        text: P::text(),
    }
}

/// Get all registered prompts.
pub fn get_all_prompts() -> Vec<PromptEntry> {
    vec![build_entry::<CoachSystemPrompt>()]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![CoachSystemPrompt::NAME]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, prompt_names());
    }
}

//! Prompt definitions module.
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod coach_system;

pub use coach_system::CoachSystemPrompt;

/// Trait for prompt definitions.
///
/// Prompts take no arguments; the text is returned as-is.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The prompt text.
    fn text() -> String;
}

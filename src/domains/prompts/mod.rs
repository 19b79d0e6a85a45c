//! Prompts domain module.
//!
//! Holds the persona prompt and the client instructions. The instructions
//! are built from the registered tool names so they always describe the
//! tools the server actually serves.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `instructions.rs` - Persona and instruction texts
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and fetching

pub mod definitions;
mod error;
pub mod instructions;
mod registry;
mod service;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use instructions::{SYSTEM_PROMPT, app_instructions};
pub use registry::{PromptEntry, get_all_prompts, prompt_names};
pub use service::PromptService;

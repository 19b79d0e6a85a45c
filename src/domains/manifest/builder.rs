//! Manifest building and export.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use super::types::{AppManifest, ServerEndpoint};
use crate::core::config::Settings;
use crate::core::error::Result;
use crate::domains::prompts::app_instructions;
use crate::domains::tools::tool_catalog;

/// Where the CLI writes the manifest by default.
pub const DEFAULT_MANIFEST_PATH: &str = "build/app.json";

/// Model the App runs on.
pub const MODEL: &str = "gpt-4.1-mini";

/// Example prompts shown to users, in display order.
pub const SAMPLE_QUESTIONS: &[&str] = &[
    "What deployment stages are still in progress?",
    "Summarize the notes about the automation backlog.",
    "How does this app avoid using my API key?",
];

const DESCRIPTION: &str = "A demo App SDK project whose logic runs on a standalone MCP server. \
     It exposes local context without requiring an OpenAI API key.";

/// Build the manifest for the given settings.
pub fn build_manifest(settings: &Settings) -> AppManifest {
    AppManifest {
        name: settings.app_name.clone(),
        description: DESCRIPTION.to_string(),
        instructions: app_instructions(),
        model: MODEL.to_string(),
        sample_questions: SAMPLE_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        tools: tool_catalog(),
        server: ServerEndpoint::mcp(&settings.public_url),
    }
}

/// Build the manifest and write it to `output_path` as indented JSON.
///
/// Missing parent directories are created; an existing file is overwritten
/// in place.
#[instrument(skip(settings))]
pub fn write_manifest(output_path: &Path, settings: &Settings) -> Result<PathBuf> {
    let manifest = build_manifest(settings);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(output_path, manifest.to_json_pretty()?)?;
    info!("Wrote manifest to {}", output_path.display());

    Ok(output_path.to_path_buf())
}

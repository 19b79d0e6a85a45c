//! Manifest domain module.
//!
//! Builds the App manifest: the document an external client imports to
//! register this server (identity, instructions, model, sample questions,
//! tool schemas, and how to reach the server). The tool list comes from the
//! tool registry, so it always matches what the server serves.

mod builder;
mod types;

pub use builder::{DEFAULT_MANIFEST_PATH, MODEL, SAMPLE_QUESTIONS, build_manifest, write_manifest};
pub use types::{AppManifest, ServerEndpoint};

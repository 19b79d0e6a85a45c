//! Manifest document types.

use serde::{Deserialize, Serialize};

use crate::domains::tools::ToolDescriptor;

/// How the client reaches the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEndpoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl ServerEndpoint {
    /// An MCP server reachable at `url`.
    pub fn mcp(url: impl Into<String>) -> Self {
        Self {
            kind: "mcp".to_string(),
            url: url.into(),
        }
    }
}

/// The App manifest. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppManifest {
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub model: String,
    pub sample_questions: Vec<String>,
    pub tools: Vec<ToolDescriptor>,
    pub server: ServerEndpoint,
}

impl AppManifest {
    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

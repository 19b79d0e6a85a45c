//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while invoking a tool.
///
/// The display strings are what clients see as the error detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("Unknown tool")]
    UnknownTool(String),

    /// `project_notes` was asked for a topic the knowledge base lacks.
    #[error("Unknown topic")]
    UnknownTopic(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "unknown topic" error.
    pub fn unknown_topic(topic: impl Into<String>) -> Self {
        Self::UnknownTopic(topic.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ToolError::unknown_tool("nope").to_string(), "Unknown tool");
        assert_eq!(
            ToolError::unknown_topic("nonexistent").to_string(),
            "Unknown topic"
        );
    }
}

//! Wire types shared by tool discovery, invocation and the manifest.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arguments passed to a tool. Values are plain strings.
pub type Arguments = BTreeMap<String, String>;

/// Schema of a single tool argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl PropertySchema {
    /// A string-typed property.
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            kind: "string".to_string(),
            description: description.into(),
        }
    }
}

/// JSON-Schema-like description of the arguments a tool accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl InputSchema {
    /// An object schema with no properties.
    pub fn object() -> Self {
        Self {
            kind: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Add a required string property.
    pub fn with_required_string(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.properties
            .insert(name.clone(), PropertySchema::string(description));
        self.required.push(name);
        self
    }

    /// Render the schema as a JSON object (for rmcp tool metadata).
    pub fn to_json_object(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}

/// Name, description and argument schema of one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

/// Body of a tool invocation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub tool: String,
    #[serde(default)]
    pub arguments: Arguments,
}

impl ToolInvocation {
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            arguments: Arguments::new(),
        }
    }

    /// Add an argument.
    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }
}

/// Successful result of a tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The answer text.
    pub content: String,

    /// Name of the tool that produced the answer.
    pub source: String,
}

impl ToolOutput {
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_shape() {
        let schema = InputSchema::object().with_required_string("topic", "topic name");
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "object",
                "properties": {"topic": {"type": "string", "description": "topic name"}},
                "required": ["topic"]
            })
        );
    }

    #[test]
    fn test_empty_schema_omits_required() {
        let value = serde_json::to_value(InputSchema::object()).unwrap();
        assert_eq!(value, json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn test_invocation_arguments_default_to_empty() {
        let invocation: ToolInvocation =
            serde_json::from_value(json!({"tool": "roadmap_status"})).unwrap();
        assert_eq!(invocation, ToolInvocation::new("roadmap_status"));
    }

    #[test]
    fn test_invocation_rejects_non_string_arguments() {
        let result: Result<ToolInvocation, _> =
            serde_json::from_value(json!({"tool": "project_notes", "arguments": {"topic": 3}}));
        assert!(result.is_err());
    }
}

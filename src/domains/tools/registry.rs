//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of registered tools (metadata + handler)
//! - Discovery of tool descriptors
//! - Dispatch of tool invocations
//!
//! The HTTP transport, the MCP router and the App manifest all read from
//! here, so a tool cannot be advertised without a handler or vice versa.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::definitions::{ProjectNotesTool, RoadmapStatusTool, ToolDefinition};
use super::error::ToolError;
use super::types::{Arguments, ToolDescriptor, ToolInvocation, ToolOutput};
use crate::domains::knowledge::KnowledgeBase;

/// Signature every tool handler shares.
pub type ToolHandlerFn = fn(&Arguments, &KnowledgeBase) -> Result<ToolOutput, ToolError>;

/// A tool's metadata paired with the function that runs it.
#[derive(Clone)]
pub struct RegisteredTool {
    pub descriptor: ToolDescriptor,
    pub handler: ToolHandlerFn,
}

/// Build a RegisteredTool from a ToolDefinition.
fn register<T: ToolDefinition>() -> RegisteredTool {
    RegisteredTool {
        descriptor: ToolDescriptor {
            name: T::NAME.to_string(),
            description: T::DESCRIPTION.to_string(),
            input_schema: T::input_schema(),
        },
        handler: T::execute,
    }
}

/// Get all registered tools, in catalog order.
///
/// This is the central place where all tools are registered.
/// When adding a new tool, add it here.
pub fn get_all_tools() -> Vec<RegisteredTool> {
    vec![register::<ProjectNotesTool>(), register::<RoadmapStatusTool>()]
}

/// Descriptors of every registered tool, in catalog order.
pub fn tool_catalog() -> Vec<ToolDescriptor> {
    get_all_tools().into_iter().map(|t| t.descriptor).collect()
}

/// Get the list of all tool names, in catalog order.
pub fn tool_names() -> Vec<String> {
    get_all_tools()
        .into_iter()
        .map(|t| t.descriptor.name)
        .collect()
}

/// Tool registry - the registered tools bound to a knowledge base.
pub struct ToolRegistry {
    knowledge: Arc<KnowledgeBase>,
    tools: BTreeMap<String, RegisteredTool>,
}

impl ToolRegistry {
    /// Create a registry serving every registered tool.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        let tools = get_all_tools()
            .into_iter()
            .map(|tool| (tool.descriptor.name.clone(), tool))
            .collect();
        Self { knowledge, tools }
    }

    /// Tool descriptors keyed by tool name.
    pub fn list_tools(&self) -> BTreeMap<String, ToolDescriptor> {
        self.tools
            .iter()
            .map(|(name, tool)| (name.clone(), tool.descriptor.clone()))
            .collect()
    }

    /// Tool descriptors as a list, ordered by name.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.values().map(|t| t.descriptor.clone()).collect()
    }

    /// Run a tool by name.
    #[instrument(skip(self, arguments))]
    pub fn call(&self, name: &str, arguments: &Arguments) -> Result<ToolOutput, ToolError> {
        let Some(tool) = self.tools.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        };

        info!("Invoking tool: {}", name);
        (tool.handler)(arguments, &self.knowledge)
    }

    /// Run a tool invocation request.
    pub fn invoke(&self, invocation: &ToolInvocation) -> Result<ToolOutput, ToolError> {
        self.call(&invocation.tool, &invocation.arguments)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ToolRegistry {
        ToolRegistry::default()
    }

    #[test]
    fn test_registry_tool_names() {
        let tools = registry().list_tools();
        let names: Vec<_> = tools.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["project_notes", "roadmap_status"]);
        assert_eq!(names, tool_names());
    }

    #[test]
    fn test_listed_descriptors_match_keys() {
        for (name, descriptor) in registry().list_tools() {
            assert_eq!(name, descriptor.name);
            assert!(!descriptor.description.is_empty());
        }
    }

    #[test]
    fn test_catalog_matches_registry() {
        assert_eq!(tool_catalog(), registry().descriptors());
    }

    #[test]
    fn test_every_tool_invocable_without_arguments() {
        let registry = registry();
        for name in tool_names() {
            match registry.call(&name, &Arguments::new()) {
                Ok(output) => assert_eq!(output.source, name),
                Err(err) => {
                    assert_eq!(name, ProjectNotesTool::NAME);
                    assert!(matches!(err, ToolError::UnknownTopic(_)));
                }
            }
        }
    }

    #[test]
    fn test_invoke_project_notes() {
        let invocation = ToolInvocation::new("project_notes").with_argument("topic", "ONBOARDING");
        let output = registry().invoke(&invocation).unwrap();
        assert!(output.content.contains("onboarding checklist"));
        assert_eq!(output.source, "project_notes");
    }

    #[test]
    fn test_tool_names_follow_catalog() {
        let catalog: Vec<String> = tool_catalog().into_iter().map(|d| d.name).collect();
        assert_eq!(tool_names(), catalog);
        assert_eq!(tool_names(), vec![ProjectNotesTool::NAME, RoadmapStatusTool::NAME]);
    }

    #[test]
    fn test_invoke_roadmap_status() {
        let output = registry()
            .invoke(&ToolInvocation::new("roadmap_status"))
            .unwrap();
        assert_eq!(
            output.content,
            "✅ Local MCP server boots with `appsdk run-server`.\n\
             ✅ Manifest generation documents the HTTP endpoints exposed to ChatGPT.\n\
             🚧 Next: proxy CRM data through a new tool once the API is available."
        );
    }

    #[test]
    fn test_invoke_unknown_tool() {
        let err = registry().invoke(&ToolInvocation::new("nope")).unwrap_err();
        assert_eq!(err, ToolError::unknown_tool("nope"));
        assert_eq!(err.to_string(), "Unknown tool");
    }

    #[test]
    fn test_registry_uses_injected_knowledge() {
        let kb = KnowledgeBase::new([("faq", "Ask away.")], ["only step"]);
        let registry = ToolRegistry::new(Arc::new(kb));

        let invocation = ToolInvocation::new("project_notes").with_argument("topic", "FAQ");
        assert_eq!(registry.invoke(&invocation).unwrap().content, "Ask away.");
        assert_eq!(
            registry
                .invoke(&ToolInvocation::new("roadmap_status"))
                .unwrap()
                .content,
            "only step"
        );
    }
}

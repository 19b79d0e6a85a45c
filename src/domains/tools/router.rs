//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the STDIO transport. Every registered tool gets one route whose
//! metadata and handler both come from the shared `ToolRegistry`.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use tracing::warn;

use super::registry::ToolRegistry;
use super::types::{Arguments, ToolDescriptor};

/// Convert a descriptor into rmcp's Tool model.
pub fn to_mcp_tool(descriptor: &ToolDescriptor) -> Tool {
    Tool {
        name: descriptor.name.clone().into(),
        description: Some(descriptor.description.clone().into()),
        input_schema: Arc::new(descriptor.input_schema.to_json_object()),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Decode MCP call arguments and run the named tool.
///
/// Arguments that are not a string map are invalid params; tool failures
/// become error results carrying the error text.
pub fn call_registered(
    registry: &ToolRegistry,
    name: &str,
    args: JsonObject,
) -> Result<CallToolResult, McpError> {
    let arguments: Arguments = serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

    match registry.call(name, &arguments) {
        Ok(output) => Ok(CallToolResult::success(vec![Content::text(output.content)])),
        Err(e) => {
            warn!("Tool {} failed: {}", name, e);
            Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
        }
    }
}

/// Create the route for one registered tool.
fn create_route<S>(registry: Arc<ToolRegistry>, descriptor: &ToolDescriptor) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = descriptor.name.clone();
    ToolRoute::new_dyn(to_mcp_tool(descriptor), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let registry = registry.clone();
        let name = name.clone();
        async move { call_registered(&registry, &name, args) }.boxed()
    })
}

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .descriptors()
        .iter()
        .fold(ToolRouter::new(), |router, descriptor| {
            router.with_route(create_route(registry.clone(), descriptor))
        })
}

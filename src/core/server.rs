//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` owns the tool registry and the prompt service. The HTTP
//! transport calls `list_tools`/`invoke_tool` directly; the STDIO transport
//! goes through the rmcp `ServerHandler` impl, whose tool router is built
//! from the same registry.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    knowledge::KnowledgeBase,
    prompts::{PromptService, app_instructions},
    tools::{ToolDescriptor, ToolError, ToolInvocation, ToolOutput, ToolRegistry, build_tool_router},
};

/// The main server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools bound to the knowledge base.
    registry: Arc<ToolRegistry>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for MCP tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server answering from the built-in knowledge base.
    pub fn new(config: Config) -> Self {
        Self::with_knowledge(config, KnowledgeBase::builtin())
    }

    /// Create a server answering from the given knowledge base.
    pub fn with_knowledge(config: Config, knowledge: KnowledgeBase) -> Self {
        let registry = Arc::new(ToolRegistry::new(Arc::new(knowledge)));

        Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            config: Arc::new(config),
            registry,
            prompt_service: Arc::new(PromptService::new()),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.settings.app_name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// List all available tools, keyed by name.
    pub fn list_tools(&self) -> BTreeMap<String, ToolDescriptor> {
        self.registry.list_tools()
    }

    /// Run a tool invocation.
    pub fn invoke_tool(&self, invocation: &ToolInvocation) -> Result<ToolOutput, ToolError> {
        self.registry.invoke(invocation)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(app_instructions()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

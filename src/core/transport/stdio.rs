//! STDIO transport implementation.
//!
//! Standard MCP over stdin/stdout. Logs go to stderr so they never mix with
//! protocol messages.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}

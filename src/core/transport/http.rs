//! HTTP transport implementation.
//!
//! Exposes the tool catalog over plain JSON endpoints:
//!
//! | Method | Path                | Body                              |
//! |--------|---------------------|-----------------------------------|
//! | GET    | `/health`           | -                                 |
//! | GET    | `/mcp/tools`        | -                                 |
//! | POST   | `/mcp/tools/invoke` | `{"tool": ..., "arguments": {..}}` |
//!
//! Unknown tools and topics answer `404 {"detail": "..."}`.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::tools::{ToolDescriptor, ToolError, ToolInvocation, ToolOutput};

pub const HEALTH_PATH: &str = "/health";
pub const TOOLS_PATH: &str = "/mcp/tools";
pub const INVOKE_PATH: &str = "/mcp/tools/invoke";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Response body of the tool listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub tools: BTreeMap<String, ToolDescriptor>,
}

/// Error body returned for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// A tool error rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(ToolError);

impl From<ToolError> for ApiError {
    fn from(err: ToolError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ToolError::UnknownTool(_) | ToolError::UnknownTopic(_) => StatusCode::NOT_FOUND,
        };
        let body = ErrorDetail {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
}

/// Build the router serving the tool catalog.
pub fn router(server: McpServer, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(root_handler))
        .route(HEALTH_PATH, get(health_check))
        .route(TOOLS_PATH, get(list_tools))
        .route(INVOKE_PATH, post(invoke_tool))
        .with_state(AppState { server })
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Health:  GET  {}", HEALTH_PATH);
        info!("  → Tools:   GET  {}", TOOLS_PATH);
        info!("  → Invoke:  POST {}", INVOKE_PATH);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "health": HEALTH_PATH,
            "tools": TOOLS_PATH,
            "invoke": INVOKE_PATH
        }
    }))
}

/// Readiness check.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Return the catalog of callable tools.
async fn list_tools(State(state): State<AppState>) -> Json<ToolListResponse> {
    info!("Listing tools");
    Json(ToolListResponse {
        tools: state.server.list_tools(),
    })
}

/// Execute a tool request.
#[instrument(skip_all, fields(tool))]
async fn invoke_tool(
    State(state): State<AppState>,
    Json(invocation): Json<ToolInvocation>,
) -> Result<Json<ToolOutput>, ApiError> {
    tracing::Span::current().record("tool", invocation.tool.as_str());
    let output = state.server.invoke_tool(&invocation)?;
    Ok(Json(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use axum::body::Body;
    use http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        router(McpServer::new(Config::default()), true)
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn invoke_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(INVOKE_PATH)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_list_tools() {
        let (status, body) = send(get_request("/mcp/tools")).await;
        assert_eq!(status, StatusCode::OK);

        let tools = body["tools"].as_object().unwrap();
        let names: Vec<_> = tools.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["project_notes", "roadmap_status"]);
        assert_eq!(tools["project_notes"]["name"], "project_notes");
        assert_eq!(
            tools["project_notes"]["input_schema"]["required"],
            json!(["topic"])
        );
    }

    #[tokio::test]
    async fn test_invoke_project_notes() {
        let (status, body) = send(invoke_request(json!({
            "tool": "project_notes",
            "arguments": {"topic": "Onboarding"}
        })))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "project_notes");
        assert!(
            body["content"]
                .as_str()
                .unwrap()
                .contains("onboarding checklist")
        );
    }

    #[tokio::test]
    async fn test_invoke_roadmap_without_arguments() {
        let (status, body) = send(invoke_request(json!({"tool": "roadmap_status"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "roadmap_status");
        assert_eq!(body["content"].as_str().unwrap().lines().count(), 3);
    }

    #[tokio::test]
    async fn test_unknown_topic_is_404() {
        let (status, body) = send(invoke_request(json!({
            "tool": "project_notes",
            "arguments": {"topic": "nonexistent"}
        })))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Unknown topic"}));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_404() {
        let (status, body) = send(invoke_request(json!({"tool": "nope", "arguments": {}}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Unknown tool"}));
    }

    #[tokio::test]
    async fn test_non_string_argument_rejected_before_tools() {
        let response = app()
            .oneshot(invoke_request(json!({
                "tool": "project_notes",
                "arguments": {"topic": 42}
            })))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        assert_ne!(response.status(), StatusCode::NOT_FOUND);
    }
}

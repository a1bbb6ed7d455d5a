//! HTTP transport implementation.
//!
//! Generic routes:
//! - `GET /health` - liveness plus the registered tool names
//! - `GET /tools` - registry reflection
//! - `POST /execute` - run any tool by name
//!
//! An unknown tool on `/execute` is a 400. A tool that runs and fails is still
//! a 200 whose envelope carries `success: false`. The convenience routes in
//! [`super::facades`] use a different policy: any failure is a 500.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{HttpConfig, TransportError, TransportResult, facades};
use crate::core::GatewayServer;
use crate::domains::tools::{
    InvocationFailure, InvocationOutcome, InvocationRequest, ResponseEnvelope,
};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub available_tools: Vec<String>,
}

/// Error body `{"detail": ...}` with a chosen status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "detail": self.detail })),
        )
            .into_response()
    }
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

    /// Bind and serve until Ctrl-C.
    pub async fn run(self, server: GatewayServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Execute: POST /execute");
        info!("  → Tools:   GET /tools");
        info!("  → Health:  GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the full router: generic routes, facades and middleware.
pub fn build_router(server: GatewayServer, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/tools", get(list_tools))
        .route("/execute", post(execute_tool))
        .merge(facades::routes())
        .with_state(server)
        .layer(CatchPanicLayer::new())
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

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<GatewayServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": server.name(),
        "version": server.version(),
        "started_at": server.started_at().to_rfc3339(),
        "endpoints": {
            "health": "GET /health",
            "tools": "GET /tools",
            "execute": "POST /execute",
            "send_message": "POST /whatsapp/send-message",
            "send_file": "POST /whatsapp/send-file",
            "chats": "GET /whatsapp/chats",
            "messages": "GET /whatsapp/messages",
            "contacts": "GET /whatsapp/contacts"
        }
    }))
}

/// Health check endpoint. Never touches the backend.
async fn health_check(State(server): State<GatewayServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: server.version().to_string(),
        available_tools: server.tool_names(),
    })
}

async fn list_tools(State(server): State<GatewayServer>) -> impl IntoResponse {
    Json(serde_json::json!({ "tools": server.list_tools() }))
}

async fn execute_tool(
    State(server): State<GatewayServer>,
    Json(request): Json<InvocationRequest>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    match server.execute(request).await {
        InvocationOutcome::Failure(failure @ InvocationFailure::ToolNotFound(_)) => {
            warn!("{}", failure.message());
            Err(ApiError::bad_request(failure.message()))
        }
        outcome => Ok(Json(outcome.into())),
    }
}

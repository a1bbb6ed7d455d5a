//! Gateway server state.
//!
//! [`GatewayServer`] bundles what every HTTP handler needs: configuration,
//! the dispatcher over the tool registry, and the backend used directly by
//! the convenience routes. It is cheap to clone and is used as the axum state.
//!
//! The registry is built here, before the listener binds, and never changes
//! afterwards.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use tracing::info;

use super::config::Config;
use super::error::{Error, Result};
use crate::domains::tools::{
    Dispatcher, InvocationOutcome, InvocationRequest, ToolRegistry, build_tool_registry,
};
use crate::domains::whatsapp::{BridgeClient, WhatsAppBackend};

/// Shown by `/tools` for a tool registered without a description.
pub const NO_DESCRIPTION: &str = "No description available";

/// The gateway's shared state.
#[derive(Clone)]
pub struct GatewayServer {
    /// Gateway configuration.
    config: Arc<Config>,

    /// Dispatcher over the read-only tool registry.
    dispatcher: Dispatcher,

    /// Backend called directly by the convenience routes.
    backend: Arc<dyn WhatsAppBackend>,

    started_at: DateTime<Utc>,
}

impl GatewayServer {
    /// Create a gateway talking to the configured WhatsApp bridge.
    pub fn new(config: Config) -> Result<Self> {
        if config.bridge.base_url.trim().is_empty() {
            return Err(Error::config("MCP_BRIDGE_URL must not be empty"));
        }
        let backend = BridgeClient::new(&config.bridge, config.security.clone())?;
        info!("Using WhatsApp bridge at {}", backend.base_url());
        Self::with_backend(config, Arc::new(backend))
    }

    /// Create a gateway exposing every WhatsApp tool over `backend`.
    pub fn with_backend(config: Config, backend: Arc<dyn WhatsAppBackend>) -> Result<Self> {
        let registry = build_tool_registry(backend.clone())?;
        info!("Loaded {} tools", registry.len());
        Ok(Self::with_registry(config, registry, backend))
    }

    /// Create a gateway from an already populated registry.
    pub fn with_registry(
        config: Config,
        registry: ToolRegistry,
        backend: Arc<dyn WhatsAppBackend>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Dispatcher::new(Arc::new(registry)),
            backend,
            started_at: Utc::now(),
        }
    }

    /// Get the gateway name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the gateway version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        self.dispatcher.registry()
    }

    pub fn backend(&self) -> &Arc<dyn WhatsAppBackend> {
        &self.backend
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.registry().names()
    }

    /// Reflection of the registry, keyed by tool name.
    pub fn list_tools(&self) -> Map<String, Value> {
        self.registry()
            .list()
            .map(|tool| {
                (
                    tool.name().to_string(),
                    json!({
                        "name": tool.name(),
                        "description": tool.description().unwrap_or(NO_DESCRIPTION),
                        "parameters": tool.parameters(),
                    }),
                )
            })
            .collect()
    }

    /// Run a tool through the dispatcher.
    pub async fn execute(&self, request: InvocationRequest) -> InvocationOutcome {
        self.dispatcher
            .invoke(&request.tool_name, request.arguments)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{ToolDefinition, handler_fn};
    use crate::domains::whatsapp::testing::RecordingBackend;
    use futures::FutureExt;

    #[test]
    fn test_with_backend_registers_whatsapp_tools() {
        let server =
            GatewayServer::with_backend(Config::default(), Arc::new(RecordingBackend::new()))
                .unwrap();

        assert_eq!(server.tool_names().len(), 8);
        assert_eq!(server.version(), "1.0.0");
        let tools = server.list_tools();
        assert_eq!(tools["send_message"]["name"], "send_message");
        assert!(tools["send_message"]["parameters"]["chat_jid"].is_object());
    }

    #[test]
    fn test_new_rejects_empty_bridge_url() {
        let mut config = Config::default();
        config.bridge.base_url = "  ".to_string();
        assert!(matches!(GatewayServer::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_list_tools_placeholder_description() {
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDefinition::new(
                "bare",
                handler_fn(|_| async { Ok(Value::Null) }.boxed()),
            ))
            .unwrap();
        let server = GatewayServer::with_registry(
            Config::default(),
            registry,
            Arc::new(RecordingBackend::new()),
        );

        let tools = server.list_tools();
        assert_eq!(tools["bare"]["description"], NO_DESCRIPTION);
        assert_eq!(tools["bare"]["parameters"], json!({}));
    }
}

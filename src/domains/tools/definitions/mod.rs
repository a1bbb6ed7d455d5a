//! Tool definitions module.
//!
//! Each WhatsApp operation is exposed as a tool through the [`WhatsAppTool`]
//! trait: a name, a description, a typed parameter struct and the backend
//! call to make. [`build_tool_registry`] is the one place where the set of
//! tools is assembled.

pub mod chats;
pub mod contacts;
pub mod messages;
pub mod messaging;

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    ToolDefinition, ToolError, ToolRegistry, bind_arguments, handler_fn, parameter_signature,
};
use crate::domains::whatsapp::{BackendResult, WhatsAppBackend};

pub use chats::{GetChatTool, ListChatsTool};
pub use contacts::SearchContactsTool;
pub use messages::{GetMessageContextTool, ListMessagesTool};
pub use messaging::{DownloadMediaTool, SendFileTool, SendMessageTool};

/// A tool that forwards to one [`WhatsAppBackend`] operation.
pub trait WhatsAppTool {
    /// Tool name as registered.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Parameters bound from the caller's arguments.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Call the backend.
    fn run(
        backend: Arc<dyn WhatsAppBackend>,
        params: Self::Params,
    ) -> BoxFuture<'static, BackendResult<Value>>;
}

/// Build the registry entry for `T`.
pub fn definition<T: WhatsAppTool + 'static>(backend: Arc<dyn WhatsAppBackend>) -> ToolDefinition {
    let handler = handler_fn(move |arguments| {
        let backend = backend.clone();
        async move {
            let params = bind_arguments::<T::Params>(arguments)?;
            T::run(backend, params).await.map_err(ToolError::from)
        }
        .boxed()
    });

    ToolDefinition::new(T::NAME, handler)
        .with_description(T::DESCRIPTION)
        .with_parameters(parameter_signature::<T::Params>())
}

/// Build the registry holding every WhatsApp tool.
pub fn build_tool_registry(backend: Arc<dyn WhatsAppBackend>) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register(definition::<SearchContactsTool>(backend.clone()))?;
    registry.register(definition::<ListMessagesTool>(backend.clone()))?;
    registry.register(definition::<GetMessageContextTool>(backend.clone()))?;
    registry.register(definition::<ListChatsTool>(backend.clone()))?;
    registry.register(definition::<GetChatTool>(backend.clone()))?;
    registry.register(definition::<SendMessageTool>(backend.clone()))?;
    registry.register(definition::<SendFileTool>(backend.clone()))?;
    registry.register(definition::<DownloadMediaTool>(backend))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{Arguments, Dispatcher, InvocationFailure, InvocationOutcome};
    use crate::domains::whatsapp::testing::{RecordedCall, RecordingBackend};
    use crate::domains::whatsapp::{ListChatsParams, SendMessageParams};
    use serde_json::json;

    fn args(value: Value) -> Arguments {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = build_tool_registry(Arc::new(RecordingBackend::new())).unwrap();
        assert_eq!(
            registry.names(),
            vec![
                "download_media",
                "get_chat",
                "get_message_context",
                "list_chats",
                "list_messages",
                "search_contacts",
                "send_file",
                "send_message",
            ]
        );
    }

    #[test]
    fn test_definitions_carry_signature() {
        let registry = build_tool_registry(Arc::new(RecordingBackend::new())).unwrap();
        let tool = registry.lookup(ListChatsTool::NAME).unwrap();

        assert_eq!(tool.description(), Some(ListChatsTool::DESCRIPTION));
        let params = tool.parameters();
        for key in ["query", "limit", "page", "include_last_message", "sort_by"] {
            assert!(params.contains_key(key), "missing parameter {}", key);
        }
        assert_eq!(params["limit"]["type"], "integer");
    }

    #[tokio::test]
    async fn test_tool_binds_arguments_for_backend() {
        let backend = Arc::new(RecordingBackend::new());
        let dispatcher = Dispatcher::new(Arc::new(build_tool_registry(backend.clone()).unwrap()));

        let outcome = dispatcher
            .invoke(
                "send_message",
                args(json!({ "chat_jid": "1@s.whatsapp.net", "message": "hello" })),
            )
            .await;

        assert_eq!(
            outcome,
            InvocationOutcome::Success(json!({ "operation": "send_message" }))
        );
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::SendMessage(SendMessageParams {
                chat_jid: "1@s.whatsapp.net".into(),
                message: "hello".into(),
                quoted_message_id: None,
            })]
        );
    }

    #[tokio::test]
    async fn test_tool_applies_defaults() {
        let backend = Arc::new(RecordingBackend::new());
        let dispatcher = Dispatcher::new(Arc::new(build_tool_registry(backend.clone()).unwrap()));

        dispatcher.invoke("list_chats", Arguments::new()).await;
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::ListChats(ListChatsParams::default())]
        );
    }

    #[tokio::test]
    async fn test_unexpected_argument_fails_without_backend_call() {
        let backend = Arc::new(RecordingBackend::new());
        let dispatcher = Dispatcher::new(Arc::new(build_tool_registry(backend.clone()).unwrap()));

        let outcome = dispatcher
            .invoke("search_contacts", args(json!({ "query": "ana", "fuzzy": true })))
            .await;

        match outcome {
            InvocationOutcome::Failure(InvocationFailure::HandlerFailed(msg)) => {
                assert!(msg.contains("fuzzy"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_becomes_handler_failure() {
        let backend = Arc::new(RecordingBackend::failing("bridge unreachable"));
        let dispatcher = Dispatcher::new(Arc::new(build_tool_registry(backend).unwrap()));

        let outcome = dispatcher
            .invoke("get_chat", args(json!({ "chat_jid": "42@g.us" })))
            .await;
        assert_eq!(
            outcome,
            InvocationOutcome::Failure(InvocationFailure::HandlerFailed(
                "bridge unreachable".into()
            ))
        );
    }
}

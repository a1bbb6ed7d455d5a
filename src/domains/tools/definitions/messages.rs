//! Message history tools.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::WhatsAppTool;
use crate::domains::whatsapp::{
    BackendResult, ListMessagesParams, MessageContextParams, WhatsAppBackend,
};

pub struct ListMessagesTool;

impl WhatsAppTool for ListMessagesTool {
    const NAME: &'static str = "list_messages";
    const DESCRIPTION: &'static str = "Get WhatsApp messages matching specified criteria with optional context around each match.";
    type Params = ListMessagesParams;

    fn run(
        backend: Arc<dyn WhatsAppBackend>,
        params: ListMessagesParams,
    ) -> BoxFuture<'static, BackendResult<Value>> {
        async move { backend.list_messages(params).await }.boxed()
    }
}

pub struct GetMessageContextTool;

impl WhatsAppTool for GetMessageContextTool {
    const NAME: &'static str = "get_message_context";
    const DESCRIPTION: &'static str = "Get context around a specific WhatsApp message.";
    type Params = MessageContextParams;

    fn run(
        backend: Arc<dyn WhatsAppBackend>,
        params: MessageContextParams,
    ) -> BoxFuture<'static, BackendResult<Value>> {
        async move { backend.get_message_context(params).await }.boxed()
    }
}

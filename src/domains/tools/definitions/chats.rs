//! Chat lookup tools.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::WhatsAppTool;
use crate::domains::whatsapp::{BackendResult, GetChatParams, ListChatsParams, WhatsAppBackend};

pub struct ListChatsTool;

impl WhatsAppTool for ListChatsTool {
    const NAME: &'static str = "list_chats";
    const DESCRIPTION: &'static str = "Get WhatsApp chats matching specified criteria, paginated and sorted by last activity or name.";
    type Params = ListChatsParams;

    fn run(
        backend: Arc<dyn WhatsAppBackend>,
        params: ListChatsParams,
    ) -> BoxFuture<'static, BackendResult<Value>> {
        async move { backend.list_chats(params).await }.boxed()
    }
}

pub struct GetChatTool;

impl WhatsAppTool for GetChatTool {
    const NAME: &'static str = "get_chat";
    const DESCRIPTION: &'static str = "Get WhatsApp chat metadata by JID.";
    type Params = GetChatParams;

    fn run(
        backend: Arc<dyn WhatsAppBackend>,
        params: GetChatParams,
    ) -> BoxFuture<'static, BackendResult<Value>> {
        async move { backend.get_chat(params).await }.boxed()
    }
}

//! The messaging backend contract.

use serde_json::Value;

use super::{
    BackendResult, DownloadMediaParams, GetChatParams, ListChatsParams, ListMessagesParams,
    MessageContextParams, SearchContactsParams, SendFileParams, SendMessageParams,
};

/// Operations the gateway exposes but does not implement itself.
///
/// Results are passed through to callers unmodified; pagination, context
/// windows and sorting are the backend's business.
#[async_trait::async_trait]
pub trait WhatsAppBackend: Send + Sync {
    async fn send_message(&self, params: SendMessageParams) -> BackendResult<Value>;

    async fn send_file(&self, params: SendFileParams) -> BackendResult<Value>;

    async fn list_chats(&self, params: ListChatsParams) -> BackendResult<Value>;

    async fn list_messages(&self, params: ListMessagesParams) -> BackendResult<Value>;

    async fn search_contacts(&self, params: SearchContactsParams) -> BackendResult<Value>;

    async fn get_chat(&self, params: GetChatParams) -> BackendResult<Value>;

    async fn get_message_context(&self, params: MessageContextParams) -> BackendResult<Value>;

    async fn download_media(&self, params: DownloadMediaParams) -> BackendResult<Value>;
}

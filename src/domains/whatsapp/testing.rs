//! In-memory backend used by tests across the crate.

use std::sync::Mutex;

use serde_json::{Value, json};

use super::*;

/// A backend call as received, with its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    SendMessage(SendMessageParams),
    SendFile(SendFileParams),
    ListChats(ListChatsParams),
    ListMessages(ListMessagesParams),
    SearchContacts(SearchContactsParams),
    GetChat(GetChatParams),
    MessageContext(MessageContextParams),
    DownloadMedia(DownloadMediaParams),
}

/// Records every call and answers `{"operation": <name>}`, or fails every
/// call with a fixed message.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<RecordedCall>>,
    failure: Option<String>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(msg.into()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, operation: &str, call: RecordedCall) -> BackendResult<Value> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(msg) => Err(BackendError::other(msg.clone())),
            None => Ok(json!({ "operation": operation })),
        }
    }
}

#[async_trait::async_trait]
impl WhatsAppBackend for RecordingBackend {
    async fn send_message(&self, params: SendMessageParams) -> BackendResult<Value> {
        self.respond("send_message", RecordedCall::SendMessage(params))
    }

    async fn send_file(&self, params: SendFileParams) -> BackendResult<Value> {
        self.respond("send_file", RecordedCall::SendFile(params))
    }

    async fn list_chats(&self, params: ListChatsParams) -> BackendResult<Value> {
        self.respond("list_chats", RecordedCall::ListChats(params))
    }

    async fn list_messages(&self, params: ListMessagesParams) -> BackendResult<Value> {
        self.respond("list_messages", RecordedCall::ListMessages(params))
    }

    async fn search_contacts(&self, params: SearchContactsParams) -> BackendResult<Value> {
        self.respond("search_contacts", RecordedCall::SearchContacts(params))
    }

    async fn get_chat(&self, params: GetChatParams) -> BackendResult<Value> {
        self.respond("get_chat", RecordedCall::GetChat(params))
    }

    async fn get_message_context(&self, params: MessageContextParams) -> BackendResult<Value> {
        self.respond("get_message_context", RecordedCall::MessageContext(params))
    }

    async fn download_media(&self, params: DownloadMediaParams) -> BackendResult<Value> {
        self.respond("download_media", RecordedCall::DownloadMedia(params))
    }
}

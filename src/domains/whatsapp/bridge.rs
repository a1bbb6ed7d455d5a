//! HTTP client for the WhatsApp bridge.
//!
//! The bridge owns the WhatsApp session and the message store and exposes
//! them over a small JSON REST API. Every call maps to one request:
//!
//! | Operation | Request |
//! |---|---|
//! | send_message / send_file | `POST {base}/send` |
//! | download_media | `POST {base}/download` |
//! | list_chats | `GET {base}/chats` |
//! | get_chat | `GET {base}/chats/{jid}` |
//! | list_messages | `GET {base}/messages` |
//! | get_message_context | `GET {base}/messages/{id}/context` |
//! | search_contacts | `GET {base}/contacts` |
//!
//! Chat JIDs and message IDs travel as single percent-encoded path segments.

use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{
    BackendError, BackendResult, DownloadMediaParams, GetChatParams, ListChatsParams,
    ListMessagesParams, MessageContextParams, SearchContactsParams, SendFileParams,
    SendMessageParams, WhatsAppBackend,
};
use crate::core::config::{BridgeConfig, SecurityConfig};
use crate::core::security::resolve_media_path;

/// Body of `POST /send`.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    recipient: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    quoted_message_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_path: Option<String>,
}

/// [`WhatsAppBackend`] backed by the bridge REST API.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    http: reqwest::Client,
    base_url: Url,
    security: SecurityConfig,
}

impl BridgeClient {
    /// Build a client for the configured bridge.
    pub fn new(bridge: &BridgeConfig, security: SecurityConfig) -> BackendResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(bridge.timeout_secs))
            .build()?;

        let raw = bridge.base_url.trim_end_matches('/');
        let base_url = Url::parse(raw)
            .map_err(|e| BackendError::other(format!("Invalid bridge URL '{}': {}", raw, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::other(format!(
                "Bridge URL '{}' cannot carry a path",
                raw
            )));
        }

        Ok(Self {
            http,
            base_url,
            security,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append `segments` to the base URL, each encoded as one path segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Reject ids that would not survive as a path segment.
    fn path_id<'a>(kind: &str, id: &'a str) -> BackendResult<&'a str> {
        match id {
            "" | "." | ".." => Err(BackendError::other(format!("Invalid {} '{}'", kind, id))),
            _ => Ok(id),
        }
    }

    async fn get_json<Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> BackendResult<Value> {
        let url = self.url(segments);
        debug!("GET {}", url);
        let response = self.http.get(url).query(query).send().await?;
        Self::read_response(response).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> BackendResult<Value> {
        let url = self.url(segments);
        debug!("POST {}", url);
        let response = self.http.post(url).json(body).send().await?;
        Self::read_response(response).await
    }

    async fn read_response(response: reqwest::Response) -> BackendResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Bridge answered {}: {}", status, body);
            return Err(BackendError::status(status.as_u16(), body));
        }
        Ok(response.json().await?)
    }

    /// Send-style endpoints acknowledge with `{success, message}`.
    fn check_ack(ack: Value) -> BackendResult<Value> {
        if ack.get("success").and_then(Value::as_bool) == Some(false) {
            let message = ack
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Bridge rejected the request");
            return Err(BackendError::rejected(message));
        }
        Ok(ack)
    }
}

#[async_trait::async_trait]
impl WhatsAppBackend for BridgeClient {
    #[instrument(skip_all, fields(chat_jid = %params.chat_jid))]
    async fn send_message(&self, params: SendMessageParams) -> BackendResult<Value> {
        let body = SendRequest {
            recipient: &params.chat_jid,
            message: &params.message,
            quoted_message_id: params.quoted_message_id.as_deref(),
            media_path: None,
        };
        Self::check_ack(self.post_json(&["send"], &body).await?)
    }

    #[instrument(skip_all, fields(chat_jid = %params.chat_jid))]
    async fn send_file(&self, params: SendFileParams) -> BackendResult<Value> {
        let security = self.security.clone();
        let file_path = params.file_path.clone();
        let media_path =
            tokio::task::spawn_blocking(move || resolve_media_path(&file_path, &security))
                .await
                .map_err(|e| BackendError::other(format!("Media path check aborted: {}", e)))??;

        let body = SendRequest {
            recipient: &params.chat_jid,
            message: params.caption.as_deref().unwrap_or_default(),
            quoted_message_id: None,
            media_path: Some(media_path.to_string_lossy().into_owned()),
        };
        Self::check_ack(self.post_json(&["send"], &body).await?)
    }

    async fn list_chats(&self, params: ListChatsParams) -> BackendResult<Value> {
        self.get_json(&["chats"], &params).await
    }

    async fn list_messages(&self, params: ListMessagesParams) -> BackendResult<Value> {
        self.get_json(&["messages"], &params).await
    }

    async fn search_contacts(&self, params: SearchContactsParams) -> BackendResult<Value> {
        self.get_json(&["contacts"], &params).await
    }

    async fn get_chat(&self, params: GetChatParams) -> BackendResult<Value> {
        let jid = Self::path_id("chat JID", &params.chat_jid)?;
        self.get_json(&["chats", jid], &[("include_last_message", params.include_last_message)])
            .await
    }

    async fn get_message_context(&self, params: MessageContextParams) -> BackendResult<Value> {
        let id = Self::path_id("message ID", &params.message_id)?;
        self.get_json(&["messages", id, "context"], &[("before", params.before), ("after", params.after)])
            .await
    }

    async fn download_media(&self, params: DownloadMediaParams) -> BackendResult<Value> {
        Self::check_ack(self.post_json(&["download"], &params).await?)
    }
}

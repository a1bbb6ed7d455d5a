//! Parameter types of the WhatsApp operations.
//!
//! The same structs bind `/execute` arguments, the query strings of the
//! convenience routes, and the requests sent to the bridge, so every default
//! here is observable by callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_limit() -> u32 {
    20
}

fn default_true() -> bool {
    true
}

fn default_sort_by() -> String {
    "last_active".to_string()
}

fn default_context_window() -> u32 {
    1
}

fn default_message_context() -> u32 {
    5
}

/// Parameters for sending a text message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SendMessageParams {
    /// JID of the chat (e.g. `123456789@s.whatsapp.net` or a group JID).
    pub chat_jid: String,

    /// Text to send.
    pub message: String,

    /// Message ID to reply to.
    #[serde(default)]
    pub quoted_message_id: Option<String>,
}

/// Parameters for sending a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SendFileParams {
    /// JID of the chat.
    pub chat_jid: String,

    /// Absolute path of the file to send.
    pub file_path: String,

    /// Optional caption shown with the file.
    #[serde(default)]
    pub caption: Option<String>,
}

/// Parameters for listing chats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListChatsParams {
    /// Filter chats by name or JID.
    #[serde(default)]
    pub query: Option<String>,

    /// Maximum number of chats to return.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,

    /// Include each chat's most recent message.
    #[serde(default = "default_true")]
    pub include_last_message: bool,

    /// Sort key: "last_active" or "name".
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

impl Default for ListChatsParams {
    fn default() -> Self {
        Self {
            query: None,
            limit: default_limit(),
            page: 0,
            include_last_message: true,
            sort_by: default_sort_by(),
        }
    }
}

/// Parameters for listing messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListMessagesParams {
    /// Only messages after this ISO-8601 timestamp.
    #[serde(default)]
    pub after: Option<String>,

    /// Only messages before this ISO-8601 timestamp.
    #[serde(default)]
    pub before: Option<String>,

    /// Only messages from this sender.
    #[serde(default)]
    pub sender_phone_number: Option<String>,

    /// Only messages in this chat.
    #[serde(default)]
    pub chat_jid: Option<String>,

    /// Full-text filter on message content.
    #[serde(default)]
    pub query: Option<String>,

    /// Maximum number of messages to return.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,

    /// Include surrounding messages for each match.
    #[serde(default = "default_true")]
    pub include_context: bool,

    /// Messages of context before each match.
    #[serde(default = "default_context_window")]
    pub context_before: u32,

    /// Messages of context after each match.
    #[serde(default = "default_context_window")]
    pub context_after: u32,
}

impl Default for ListMessagesParams {
    fn default() -> Self {
        Self {
            after: None,
            before: None,
            sender_phone_number: None,
            chat_jid: None,
            query: None,
            limit: default_limit(),
            page: 0,
            include_context: true,
            context_before: default_context_window(),
            context_after: default_context_window(),
        }
    }
}

/// Parameters for searching contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchContactsParams {
    /// Name or phone number fragment.
    pub query: String,
}

/// Parameters for fetching one chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GetChatParams {
    /// JID of the chat.
    pub chat_jid: String,

    /// Include the chat's most recent message.
    #[serde(default = "default_true")]
    pub include_last_message: bool,
}

/// Parameters for fetching the messages around one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MessageContextParams {
    /// ID of the anchor message.
    pub message_id: String,

    /// Messages to include before the anchor.
    #[serde(default = "default_message_context")]
    pub before: u32,

    /// Messages to include after the anchor.
    #[serde(default = "default_message_context")]
    pub after: u32,
}

/// Parameters for downloading the media attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DownloadMediaParams {
    /// ID of the message carrying the media.
    pub message_id: String,

    /// JID of the chat the message belongs to.
    pub chat_jid: String,
}

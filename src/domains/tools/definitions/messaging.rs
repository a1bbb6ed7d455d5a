//! Outbound messaging tools: text, files and media download.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::WhatsAppTool;
use crate::domains::whatsapp::{
    BackendResult, DownloadMediaParams, SendFileParams, SendMessageParams, WhatsAppBackend,
};

/// Send a text message to a person or group.
pub struct SendMessageTool;

impl WhatsAppTool for SendMessageTool {
    const NAME: &'static str = "send_message";
    const DESCRIPTION: &'static str = "Send a WhatsApp message to a person or group, optionally replying to an earlier message.";
    type Params = SendMessageParams;

    fn run(
        backend: Arc<dyn WhatsAppBackend>,
        params: SendMessageParams,
    ) -> BoxFuture<'static, BackendResult<Value>> {
        async move { backend.send_message(params).await }.boxed()
    }
}

/// Send a local file (image, video, document) with an optional caption.
pub struct SendFileTool;

impl WhatsAppTool for SendFileTool {
    const NAME: &'static str = "send_file";
    const DESCRIPTION: &'static str =
        "Send a file such as a picture, video or document to a person or group.";
    type Params = SendFileParams;

    fn run(
        backend: Arc<dyn WhatsAppBackend>,
        params: SendFileParams,
    ) -> BoxFuture<'static, BackendResult<Value>> {
        async move { backend.send_file(params).await }.boxed()
    }
}

/// Download the media attached to a message and return its local path.
pub struct DownloadMediaTool;

impl WhatsAppTool for DownloadMediaTool {
    const NAME: &'static str = "download_media";
    const DESCRIPTION: &'static str =
        "Download media from a WhatsApp message and get the local file path.";
    type Params = DownloadMediaParams;

    fn run(
        backend: Arc<dyn WhatsAppBackend>,
        params: DownloadMediaParams,
    ) -> BoxFuture<'static, BackendResult<Value>> {
        async move { backend.download_media(params).await }.boxed()
    }
}

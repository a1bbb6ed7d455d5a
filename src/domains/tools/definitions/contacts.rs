//! Contact search tool.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::WhatsAppTool;
use crate::domains::whatsapp::{BackendResult, SearchContactsParams, WhatsAppBackend};

pub struct SearchContactsTool;

impl WhatsAppTool for SearchContactsTool {
    const NAME: &'static str = "search_contacts";
    const DESCRIPTION: &'static str = "Search WhatsApp contacts by name or phone number.";
    type Params = SearchContactsParams;

    fn run(
        backend: Arc<dyn WhatsAppBackend>,
        params: SearchContactsParams,
    ) -> BoxFuture<'static, BackendResult<Value>> {
        async move { backend.search_contacts(params).await }.boxed()
    }
}

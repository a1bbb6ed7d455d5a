//! Convenience routes for the common WhatsApp operations.
//!
//! Each route binds a fixed parameter list from the query string and calls
//! one backend operation directly, without going through the registry.
//! Success is `{"success": true, "data": ...}`; any failure is a 500 with
//! the failure text as `detail`.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use serde_json::Value;
use tracing::{error, info};

use super::http::ApiError;
use crate::core::GatewayServer;
use crate::domains::tools::FacadeEnvelope;
use crate::domains::whatsapp::{
    BackendResult, ListChatsParams, ListMessagesParams, SearchContactsParams, SendFileParams,
    SendMessageParams,
};

type FacadeResult = Result<Json<FacadeEnvelope>, ApiError>;

/// Routes mounted under `/whatsapp`.
pub(super) fn routes() -> Router<GatewayServer> {
    Router::new()
        .route("/whatsapp/send-message", post(send_message))
        .route("/whatsapp/send-file", post(send_file))
        .route("/whatsapp/chats", get(list_chats))
        .route("/whatsapp/messages", get(list_messages))
        .route("/whatsapp/contacts", get(search_contacts))
}

fn respond(action: &str, result: BackendResult<Value>) -> FacadeResult {
    match result {
        Ok(data) => Ok(Json(FacadeEnvelope::success(data))),
        Err(e) => {
            error!("Error {}: {}", action, e);
            Err(ApiError::internal(e.to_string()))
        }
    }
}

async fn send_message(
    State(server): State<GatewayServer>,
    Query(params): Query<SendMessageParams>,
) -> FacadeResult {
    info!("Sending message to {}", params.chat_jid);
    respond("sending message", server.backend().send_message(params).await)
}

async fn send_file(
    State(server): State<GatewayServer>,
    Query(params): Query<SendFileParams>,
) -> FacadeResult {
    info!("Sending file {} to {}", params.file_path, params.chat_jid);
    respond("sending file", server.backend().send_file(params).await)
}

async fn list_chats(
    State(server): State<GatewayServer>,
    Query(params): Query<ListChatsParams>,
) -> FacadeResult {
    respond("getting chats", server.backend().list_chats(params).await)
}

async fn list_messages(
    State(server): State<GatewayServer>,
    Query(params): Query<ListMessagesParams>,
) -> FacadeResult {
    respond("getting messages", server.backend().list_messages(params).await)
}

async fn search_contacts(
    State(server): State<GatewayServer>,
    Query(params): Query<SearchContactsParams>,
) -> FacadeResult {
    respond(
        "searching contacts",
        server.backend().search_contacts(params).await,
    )
}

#[cfg(test)]
mod tests {
    use super::super::http::build_router;
    use super::super::http::tests::{get_request, send};
    use crate::core::{Config, GatewayServer};
    use crate::domains::whatsapp::testing::{RecordedCall, RecordingBackend};
    use crate::domains::whatsapp::{
        ListChatsParams, ListMessagesParams, SearchContactsParams, SendFileParams,
        SendMessageParams,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use std::sync::Arc;

    fn app(backend: Arc<RecordingBackend>) -> axum::Router {
        let server = GatewayServer::with_backend(Config::default(), backend).unwrap();
        build_router(server, false)
    }

    fn post_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_chats_pass_through_exact_parameters() {
        let backend = Arc::new(RecordingBackend::new());
        let (status, body) = send(
            app(backend.clone()),
            get_request("/whatsapp/chats?limit=5&page=1&sort_by=last_active"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": true, "data": { "operation": "list_chats" } })
        );
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::ListChats(ListChatsParams {
                query: None,
                limit: 5,
                page: 1,
                include_last_message: true,
                sort_by: "last_active".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_messages_defaults() {
        let backend = Arc::new(RecordingBackend::new());
        let (status, _) = send(
            app(backend.clone()),
            get_request("/whatsapp/messages?chat_jid=42%40g.us&include_context=false"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::ListMessages(ListMessagesParams {
                chat_jid: Some("42@g.us".into()),
                include_context: false,
                ..Default::default()
            })]
        );
    }

    #[tokio::test]
    async fn test_send_message_from_query() {
        let backend = Arc::new(RecordingBackend::new());
        let (status, body) = send(
            app(backend.clone()),
            post_request(
                "/whatsapp/send-message?chat_jid=1%40s.whatsapp.net&message=hello%20there",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::SendMessage(SendMessageParams {
                chat_jid: "1@s.whatsapp.net".into(),
                message: "hello there".into(),
                quoted_message_id: None,
            })]
        );
    }

    #[tokio::test]
    async fn test_send_file_with_caption() {
        let backend = Arc::new(RecordingBackend::new());
        let (status, _) = send(
            app(backend.clone()),
            post_request(
                "/whatsapp/send-file?chat_jid=1%40s.whatsapp.net&file_path=%2Ftmp%2Fa.png&caption=hi",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::SendFile(SendFileParams {
                chat_jid: "1@s.whatsapp.net".into(),
                file_path: "/tmp/a.png".into(),
                caption: Some("hi".into()),
            })]
        );
    }

    #[tokio::test]
    async fn test_contacts_query() {
        let backend = Arc::new(RecordingBackend::new());
        let (status, body) = send(
            app(backend.clone()),
            get_request("/whatsapp/contacts?query=ana"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["operation"], "search_contacts");
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::SearchContacts(SearchContactsParams {
                query: "ana".into()
            })]
        );
    }

    #[tokio::test]
    async fn test_backend_failure_is_server_error() {
        let backend = Arc::new(RecordingBackend::failing("bridge unreachable"));
        let (status, body) = send(app(backend), get_request("/whatsapp/chats")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "detail": "bridge unreachable" }));
    }

    #[tokio::test]
    async fn test_missing_required_parameter_rejected() {
        let backend = Arc::new(RecordingBackend::new());
        let (status, _) = send(app(backend.clone()), get_request("/whatsapp/contacts")).await;

        assert!(status.is_client_error());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_execute_and_facade_policies_differ() {
        let backend = Arc::new(RecordingBackend::failing("not connected"));
        let router = app(backend);

        let request = Request::builder()
            .method("POST")
            .uri("/execute")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "tool_name": "search_contacts", "arguments": { "query": "ana" } })
                    .to_string(),
            ))
            .unwrap();
        let (status, body) = send(router.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "not connected");

        let (status, _) = send(router, get_request("/whatsapp/contacts?query=ana")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Echo and message endpoints

use crate::api::ApiError;
use crate::api::conversations::schemas;
use crate::core::input::EchoRequest;
use crate::core::traits::ConversationService;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use di_axum::Inject;
use log::debug;
use serde_json::Value;

const ECHO_FAILURE: &str = "Internal server error";
const DATABASE_FAILURE: &str = "Database error";

pub(crate) async fn handle_echo(
    Inject(conversation_service): Inject<dyn ConversationService>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<schemas::EchoResponse>, ApiError> {
    let body = match body {
        Ok(Json(body)) => Some(body),
        Err(rejection) => {
            debug!("echo body ignored: {rejection}");
            None
        }
    };

    let reply = conversation_service
        .handle_echo(EchoRequest::from_body(body))
        .await
        .map_err(|e| ApiError::from_service("Echo API", ECHO_FAILURE, e))?;

    Ok(Json(schemas::EchoResponse {
        message: reply.echo_text,
        conversation_id: reply.conversation_id,
    }))
}

pub(crate) async fn list_messages(
    Inject(conversation_service): Inject<dyn ConversationService>,
) -> Result<Json<Vec<schemas::Message>>, ApiError> {
    let messages = conversation_service
        .list_messages()
        .await
        .map_err(|e| ApiError::from_service("Get messages", DATABASE_FAILURE, e))?;

    Ok(Json(messages.into_iter().map(schemas::Message::from).collect()))
}

pub(crate) async fn clear_messages(
    Inject(conversation_service): Inject<dyn ConversationService>,
) -> Result<Json<schemas::ClearResponse>, ApiError> {
    conversation_service
        .clear_messages()
        .await
        .map_err(|e| ApiError::from_service("Clear messages", DATABASE_FAILURE, e))?;

    Ok(Json(schemas::ClearResponse { success: true }))
}

use crate::config::Settings;
use crate::core::error::ConversationError;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use di::ServiceProvider;
use di_axum::RouterServiceProviderExtensions;
use log::error;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod conversations;
pub mod echo;

/// Body returned with every failed request.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found() -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            message: "Not found".to_owned(),
        }
    }

    /// Maps a service failure to a response.
    ///
    /// Storage causes are logged here and replaced by `failure_message`.
    pub fn from_service(
        operation: &str,
        failure_message: &'static str,
        err: ConversationError,
    ) -> Self {
        match err {
            ConversationError::Validation(e) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: e.to_string(),
            },
            ConversationError::Storage(e) => {
                error!("{operation} error: {:#}", anyhow::Error::new(e));
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: failure_message.to_owned(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Routes of the echo API. Any other method or path answers 404.
pub fn router() -> Router {
    Router::new()
        .route("/echo", post(echo::handle_echo).fallback(not_found))
        .route(
            "/messages",
            get(echo::list_messages)
                .delete(echo::clear_messages)
                .fallback(not_found),
        )
        .route(
            "/conversations",
            get(conversations::list_conversations).fallback(not_found),
        )
        .route(
            "/conversations/:conversation_id/messages",
            get(conversations::conversation_messages).fallback(not_found),
        )
}

/// The full application: the API under `/api`, request tracing, CORS and DI.
pub fn app(provider: ServiceProvider, settings: &Settings) -> Router {
    let cors = CorsLayer::new()
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(AllowOrigin::list(settings.cors_origins.clone()));

    Router::new()
        .nest("/api", router())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_provider(provider)
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::application::proxy::ProxyError;
use crate::application::render::RenderError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Proxy(#[from] ProxyError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not found".to_string()),
            AppError::Proxy(err) => match &err {
                ProxyError::NotMatched(_) => (StatusCode::NOT_FOUND, "not found".to_string()),
                ProxyError::RequestBody(_) => (StatusCode::PAYLOAD_TOO_LARGE, err.to_string()),
                ProxyError::Upstream(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
            },
            AppError::Render(err) => {
                tracing::error!("{err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

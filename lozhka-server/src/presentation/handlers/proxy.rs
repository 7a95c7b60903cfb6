use axum::{
    extract::{Request, State},
    response::Response,
};

use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};

pub(crate) async fn forward(State(state): State<AppState>, request: Request) -> AppResult<Response> {
    let Some(proxy) = state.proxy.as_ref() else {
        return Err(AppError::NotFound(request.uri().path().to_string()));
    };
    Ok(proxy.forward(request).await?)
}

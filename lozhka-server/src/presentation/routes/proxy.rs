use axum::{Router, routing::any};

use crate::presentation::AppState;
use crate::presentation::handlers::proxy::forward;

pub(crate) fn router(prefix: &str) -> Router<AppState> {
    Router::new()
        .route(prefix, any(forward))
        .route(&format!("{prefix}/"), any(forward))
        .route(&format!("{prefix}/{{*rest}}"), any(forward))
}

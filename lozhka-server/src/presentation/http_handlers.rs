use axum::{Json, Router, routing::get};
use serde::Serialize;
use tower_http::services::ServeDir;

use super::handlers::pages::not_found;
use super::{AppState, routes};

pub(crate) fn routes(state: AppState) -> Router {
    let assets = ServeDir::new(&state.settings.static_dir);

    Router::new()
        .route("/healthz", get(health_handler))
        .merge(routes::router(&state))
        .nest_service("/static", assets)
        .fallback(not_found)
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}

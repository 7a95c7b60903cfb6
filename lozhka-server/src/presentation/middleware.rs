use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Лимит тела проверяет сам прокси (`to_bytes`), чтобы отказ 413 шёл через
/// `AppError` и имел JSON-тело. Слой `DefaultBodyLimit` задаёт тот же лимит
/// для экстракторов.
pub(crate) fn apply_middleware(router: Router, body_limit_bytes: usize) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(body_limit_bytes)),
    )
}

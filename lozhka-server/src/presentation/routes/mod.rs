use axum::Router;

use super::AppState;

pub(crate) mod pages;
pub(crate) mod proxy;

pub(crate) fn router(state: &AppState) -> Router<AppState> {
    let router = pages::router();
    match &state.proxy {
        Some(service) => router.merge(proxy::router(service.rule().prefix())),
        None => router,
    }
}

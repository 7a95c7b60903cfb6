use axum::{Router, extract::State, routing::get};
use lozhka_ui::pages;

use crate::presentation::AppState;
use crate::presentation::handlers::pages::page;

/// Маршрут на каждую страницу из реестра.
pub(crate) fn router() -> Router<AppState> {
    pages().iter().fold(Router::new(), |router, registered| {
        router.route(
            registered.path,
            get(move |State(state): State<AppState>| async move { page(&state, registered) }),
        )
    })
}

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use lozhka_ui::{Markup, Page};

use crate::application::proxy::{API_PREFIX, is_under_prefix};
use crate::application::render::{render_not_found, render_view};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};

pub(crate) fn page(state: &AppState, page: &Page) -> AppResult<Html<String>> {
    view(state, page.path, page.title, || page.render())
}

pub(crate) fn view(
    state: &AppState,
    path: &str,
    title: &str,
    render: impl Fn() -> Markup,
) -> AppResult<Html<String>> {
    let html = render_view(path, title, state.strict_render(), state.asset_version(), render)?;
    Ok(Html(html))
}

/// Неизвестные пути под `/api` получают JSON-ошибку, остальные — HTML-страницу.
pub(crate) async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    if is_under_prefix(API_PREFIX, path) {
        return AppError::NotFound(path.to_string()).into_response();
    }

    match render_not_found(path, state.strict_render(), state.asset_version()) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

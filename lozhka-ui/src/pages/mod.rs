//! Страницы и их реестр по URL-пути.

use maud::Markup;
use serde::Serialize;
use thiserror::Error;

/// Главная страница.
pub mod home;
/// Страница для неизвестных путей.
pub mod not_found;

#[derive(Debug, Error, PartialEq, Eq)]
/// Ошибки поиска страницы.
pub enum PageError {
    /// Для пути не зарегистрирована страница.
    #[error("page not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, Serialize)]
/// Страница, доступная по фиксированному пути.
pub struct Page {
    /// URL-путь страницы.
    pub path: &'static str,
    /// Заголовок для `<title>`.
    pub title: &'static str,
    #[serde(skip)]
    render: fn() -> Markup,
}

impl Page {
    /// Рендерит страницу вместе с общей рамкой.
    pub fn render(&self) -> Markup {
        (self.render)()
    }
}

static PAGES: [Page; 1] = [Page {
    path: "/",
    title: "Главная",
    render: home::home,
}];

/// Все зарегистрированные страницы в порядке объявления.
pub fn pages() -> &'static [Page] {
    &PAGES
}

/// Ищет страницу по пути. Завершающий `/` игнорируется.
pub fn find_page(path: &str) -> Result<&'static Page, PageError> {
    let normalized = normalize_path(path);
    PAGES
        .iter()
        .find(|page| page.path == normalized)
        .ok_or_else(|| PageError::NotFound(path.to_string()))
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

//! Серверный рендеринг страниц «Ложки».
//!
//! Крейт не держит состояния: каждая функция рендера чистая и возвращает
//! готовую разметку (`maud::Markup`).
//! - [`layout::main_layout`] — общая рамка страницы с навигацией;
//! - [`pages`] — страницы и их реестр по URL-пути;
//! - [`document::render_document`] — полный HTML-документ вокруг страницы.
#![warn(missing_docs)]

/// HTML-документ вокруг страницы.
pub mod document;
/// Общая рамка страницы.
pub mod layout;
/// Статичные данные: навигация и карточки.
pub mod model;
pub mod pages;

pub use document::{DocumentOptions, render_document};
pub use layout::main_layout;
pub use maud::{Markup, PreEscaped};
pub use model::{BRAND_NAME, FEATURE_CARDS, FeatureCard, LinkEmphasis, NavLink};
pub use pages::{Page, PageError, find_page, pages};

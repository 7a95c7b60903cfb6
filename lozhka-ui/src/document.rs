use maud::{DOCTYPE, Markup, html};

use crate::model::BRAND_NAME;

/// Путь к таблице стилей относительно корня сайта.
pub const STYLESHEET_PATH: &str = "/static/app.css";

#[derive(Debug, Clone, Copy)]
/// Параметры HTML-документа вокруг страницы.
pub struct DocumentOptions<'a> {
    /// Заголовок страницы, к нему добавляется название сервиса.
    pub title: &'a str,
    /// Версия статики. Меняется при изменении файлов, чтобы браузер
    /// не брал таблицу стилей из кэша.
    pub asset_version: u64,
}

/// Оборачивает отрендеренную страницу в полный HTML-документ.
pub fn render_document(options: &DocumentOptions<'_>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (options.title) " | " (BRAND_NAME) }
                link rel="stylesheet" href=(stylesheet_href(options.asset_version));
            }
            body { (body) }
        }
    }
}

fn stylesheet_href(asset_version: u64) -> String {
    format!("{STYLESHEET_PATH}?v={asset_version}")
}

#[cfg(test)]
mod tests {
    use maud::html;

    use super::{DocumentOptions, render_document};

    #[test]
    fn document_contains_head_and_body() {
        let options = DocumentOptions {
            title: "Главная",
            asset_version: 7,
        };
        let doc = render_document(&options, html! { p { "тело" } }).into_string();

        assert!(doc.starts_with("<!DOCTYPE html><html lang=\"ru\">"));
        assert!(doc.contains("<meta charset=\"utf-8\">"));
        assert!(doc.contains("<title>Главная | Ложка</title>"));
        assert!(doc.contains(r#"<link rel="stylesheet" href="/static/app.css?v=7">"#));
        assert!(doc.ends_with("<body><p>тело</p></body></html>"));
    }

    #[test]
    fn document_escapes_title() {
        let options = DocumentOptions {
            title: "<b>",
            asset_version: 0,
        };
        let doc = render_document(&options, html! {}).into_string();

        assert!(doc.contains("<title>&lt;b&gt; | Ложка</title>"));
    }
}

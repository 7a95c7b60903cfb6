use maud::{Markup, html};

use crate::layout::main_layout;

/// Заголовок страницы «не найдено».
pub const NOT_FOUND_TITLE: &str = "Страница не найдена";

/// Страница для путей без обработчика. Путь выводится как текст.
pub fn not_found(path: &str) -> Markup {
    main_layout(html! {
        div class="text-center" {
            h1 class="text-4xl font-bold mb-4" { (NOT_FOUND_TITLE) }
            p class="text-xl text-gray-600 mb-8" {
                "Адрес " code { (path) } " не существует."
            }
            a href="/" class="text-blue-500 hover:text-blue-600" { "На главную" }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::not_found;
    use crate::layout::tests::main_region;

    #[test]
    fn not_found_escapes_requested_path() {
        let page = not_found("/<script>").into_string();

        assert!(page.contains("<code>/&lt;script&gt;</code>"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn not_found_links_back_home() {
        let page = not_found("/missing").into_string();

        assert!(main_region(&page).contains(r#"<a href="/" class="text-blue-500 hover:text-blue-600">На главную</a>"#));
        assert!(page.contains("Страница не найдена"));
    }
}

use maud::{Markup, html};

use crate::model::{AUX_LINKS, BRAND_LINK, NavLink};

/// Классы области контента `<main>`.
pub(crate) const MAIN_CLASS: &str = "max-w-7xl mx-auto py-6 px-4";

/// Общая рамка страницы: навигация сверху и область контента.
///
/// Фрагмент `children` вставляется в `<main>` без изменений. Пустой фрагмент
/// допустим: навигация рендерится всегда.
pub fn main_layout(children: Markup) -> Markup {
    html! {
        div class="min-h-screen bg-gray-100" {
            nav class="bg-white shadow-lg" {
                div class="max-w-7xl mx-auto px-4" {
                    div class="flex justify-between h-16" {
                        div class="flex" {
                            a href=(BRAND_LINK.href) class="flex items-center" {
                                span class="text-xl font-bold" { (BRAND_LINK.label) }
                            }
                        }
                        div class="flex items-center space-x-4" {
                            @for link in &AUX_LINKS {
                                (nav_link(link))
                            }
                        }
                    }
                }
            }
            main class=(MAIN_CLASS) { (children) }
        }
    }
}

fn nav_link(link: &NavLink) -> Markup {
    html! {
        a href=(link.href) class=(link.class()) { (link.label) }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use maud::{PreEscaped, html};

    use super::{MAIN_CLASS, main_layout};

    fn main_open_tag() -> String {
        format!(r#"<main class="{MAIN_CLASS}">"#)
    }

    pub(crate) fn main_region(page: &str) -> &str {
        let tag = main_open_tag();
        let start = page.find(&tag).expect("main region must exist") + tag.len();
        let end = page.rfind("</main>").expect("main region must be closed");
        &page[start..end]
    }

    pub(crate) fn link_targets(page: &str) -> Vec<&str> {
        page.match_indices("<a href=\"")
            .map(|(idx, prefix)| {
                let rest = &page[idx + prefix.len()..];
                &rest[..rest.find('"').expect("href must be closed")]
            })
            .collect()
    }

    #[test]
    fn layout_keeps_fragment_unmodified() {
        let fragments = [
            "<p>привет</p>",
            "<div class=\"x\"><b>&amp;</b> текст</div>",
            "plain text with <br> and \"quotes\"",
            "<main>вложенный main</main>",
        ];

        for fragment in fragments {
            let page = main_layout(PreEscaped(fragment.to_string())).into_string();
            assert_eq!(main_region(&page), fragment);
        }
    }

    #[test]
    fn layout_renders_exactly_three_nav_links() {
        let page = main_layout(html! { p { "контент" } }).into_string();

        assert_eq!(link_targets(&page), vec!["/", "/login", "/register"]);
        assert!(page.contains(">Ложка</span>"));
        assert!(page.contains(">Войти</a>"));
        assert!(page.contains(">Регистрация</a>"));
    }

    #[test]
    fn layout_marks_register_as_primary_action() {
        let page = main_layout(html! {}).into_string();

        assert!(page.contains(
            r#"<a href="/register" class="bg-blue-500 text-white px-4 py-2 rounded-md hover:bg-blue-600">"#
        ));
        assert!(page.contains(r#"<a href="/login" class="text-gray-700 hover:text-gray-900">"#));
    }

    #[test]
    fn layout_with_empty_fragment_still_renders_chrome() {
        let page = main_layout(PreEscaped(String::new())).into_string();

        assert_eq!(main_region(&page), "");
        assert!(page.starts_with(r#"<div class="min-h-screen bg-gray-100"><nav class="bg-white shadow-lg">"#));
        assert_eq!(link_targets(&page).len(), 3);
    }

    #[test]
    fn nav_comes_before_main() {
        let page = main_layout(html! { p { "x" } }).into_string();

        let nav = page.find("<nav").expect("nav must exist");
        let main = page.find(&main_open_tag()).expect("main must exist");
        assert!(nav < main);
    }
}

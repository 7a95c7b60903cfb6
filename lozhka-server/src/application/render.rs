use lozhka_ui::pages::not_found::{NOT_FOUND_TITLE, not_found};
use lozhka_ui::{DocumentOptions, Markup, render_document};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("page {path} rendered differently on repeated render")]
    Inconsistent { path: String },
}

/// Рендерит разметку. В строгом режиме рендер выполняется дважды и
/// результаты сравниваются: рендер обязан быть чистой функцией.
pub(crate) fn render_checked(
    path: &str,
    strict: bool,
    render: impl Fn() -> Markup,
) -> Result<Markup, RenderError> {
    let first = render();
    if strict {
        let second = render();
        if first.0 != second.0 {
            error!(path, "inconsistent render output");
            return Err(RenderError::Inconsistent {
                path: path.to_string(),
            });
        }
    }
    Ok(first)
}

/// Полный HTML-документ: тело проходит через [`render_checked`].
pub(crate) fn render_view(
    path: &str,
    title: &str,
    strict: bool,
    asset_version: u64,
    render: impl Fn() -> Markup,
) -> Result<String, RenderError> {
    let body = render_checked(path, strict, render)?;
    let options = DocumentOptions {
        title,
        asset_version,
    };
    Ok(render_document(&options, body).into_string())
}

pub(crate) fn render_not_found(
    path: &str,
    strict: bool,
    asset_version: u64,
) -> Result<String, RenderError> {
    render_view(path, NOT_FOUND_TITLE, strict, asset_version, || not_found(path))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use lozhka_ui::{PreEscaped, find_page};

    use super::{RenderError, render_checked, render_not_found, render_view};

    #[test]
    fn strict_mode_rejects_impure_render() {
        let calls = Cell::new(0);
        let result = render_checked("/counter", true, || {
            calls.set(calls.get() + 1);
            PreEscaped(format!("<p>{}</p>", calls.get()))
        });

        assert!(matches!(
            result,
            Err(RenderError::Inconsistent { ref path }) if path == "/counter"
        ));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn relaxed_mode_renders_once() {
        let calls = Cell::new(0);
        let result = render_checked("/counter", false, || {
            calls.set(calls.get() + 1);
            PreEscaped(format!("<p>{}</p>", calls.get()))
        })
        .expect("relaxed render must succeed");

        assert_eq!(result.0, "<p>1</p>");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn home_passes_strict_check() {
        let page = find_page("/").expect("home must be registered");
        let html = render_view(page.path, page.title, true, 3, || page.render())
            .expect("home render is pure");

        assert!(html.contains("<title>Главная | Ложка</title>"));
        assert!(html.contains("/static/app.css?v=3"));
        assert!(html.contains("Добро пожаловать в Ложку"));
    }

    #[test]
    fn not_found_document_has_title() {
        let html = render_not_found("/nope", true, 0).expect("404 render is pure");
        assert!(html.contains("<title>Страница не найдена | Ложка</title>"));
        assert!(html.contains("<code>/nope</code>"));
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use lozhka_ui::{DocumentOptions, Page, find_page, pages, render_document};
use serde::Deserialize;

const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "lozhka-cli", version, about = "CLI для страниц «Ложки»")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Печатает HTML-документ страницы в stdout.
    Render {
        #[arg(long, default_value = "/")]
        path: String,
        /// Версия статики в ссылке на таблицу стилей.
        #[arg(long, default_value_t = 0)]
        asset_version: u64,
    },
    /// Сохраняет все страницы в каталог: `/` -> `index.html`, `/x` -> `x/index.html`.
    Export {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        asset_version: u64,
    },
    /// Список зарегистрированных страниц в JSON.
    Pages,
    /// Проверяет `/healthz` запущенного сервера.
    Health {
        /// Адрес сервера, по умолчанию `LOZHKA_SERVER` или http://127.0.0.1:3000.
        #[arg(long)]
        server: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            path,
            asset_version,
        } => {
            let page = find_page(&path)?;
            println!("{}", render_html(page, asset_version));
        }
        Command::Export { out, asset_version } => {
            let written = export_pages(&out, asset_version)?;
            for file in &written {
                println!("{}", file.display());
            }
            println!("Страниц сохранено: {}", written.len());
        }
        Command::Pages => {
            let json = serde_json::to_string_pretty(pages())
                .context("не удалось сериализовать список страниц")?;
            println!("{json}");
        }
        Command::Health { server } => {
            let server = resolve_server(server);
            let status = check_health(&server).await?;
            println!("{server}: {status}");
        }
    }

    Ok(())
}

fn render_html(page: &Page, asset_version: u64) -> String {
    let options = DocumentOptions {
        title: page.title,
        asset_version,
    };
    render_document(&options, page.render()).into_string()
}

fn export_pages(out: &Path, asset_version: u64) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(pages().len());
    for page in pages() {
        let file = export_path(out, page.path);
        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("не удалось создать каталог {}", dir.display()))?;
        }
        fs::write(&file, render_html(page, asset_version))
            .with_context(|| format!("не удалось записать {}", file.display()))?;
        written.push(file);
    }
    Ok(written)
}

fn export_path(out: &Path, page_path: &str) -> PathBuf {
    let mut file = out.to_path_buf();
    for segment in page_path.split('/').filter(|segment| !segment.is_empty()) {
        file.push(segment);
    }
    file.push("index.html");
    file
}

fn resolve_server(server: Option<String>) -> String {
    let raw = server
        .or_else(|| std::env::var("LOZHKA_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    let server = server.trim_end_matches('/').to_string();
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

async fn check_health(server: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    let response = client
        .get(format!("{server}/healthz"))
        .send()
        .await
        .with_context(|| format!("сервер {server} недоступен"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("сервер ответил {status}"));
    }

    let body: HealthResponse = response
        .json()
        .await
        .context("некорректный ответ /healthz")?;
    Ok(body.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_maps_root_to_index() {
        let file = export_path(Path::new("out"), "/");
        assert_eq!(file, Path::new("out").join("index.html"));
    }

    #[test]
    fn export_path_nests_segments() {
        let file = export_path(Path::new("out"), "/docs/intro");
        assert_eq!(
            file,
            Path::new("out").join("docs").join("intro").join("index.html")
        );
    }

    #[test]
    fn export_writes_every_registered_page() {
        let dir = tempfile::tempdir().expect("tempdir");
        let written = export_pages(dir.path(), 2).expect("export must succeed");

        assert_eq!(written.len(), pages().len());
        let html = fs::read_to_string(dir.path().join("index.html")).expect("index.html");
        assert!(html.contains("Добро пожаловать в Ложку"));
        assert!(html.contains("/static/app.css?v=2"));
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        assert_eq!(
            normalize_server("127.0.0.1:3000/".to_string()),
            "http://127.0.0.1:3000"
        );
        assert_eq!(
            normalize_server("https://lozhka.example".to_string()),
            "https://lozhka.example"
        );
    }

    #[test]
    fn cli_parses_render_defaults() {
        let cli = Cli::try_parse_from(["lozhka-cli", "render"]).expect("valid args");
        match cli.command {
            Command::Render {
                path,
                asset_version,
            } => {
                assert_eq!(path, "/");
                assert_eq!(asset_version, 0);
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn cli_requires_export_dir() {
        assert!(Cli::try_parse_from(["lozhka-cli", "export"]).is_err());
    }
}

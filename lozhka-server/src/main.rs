use anyhow::Result;
use tracing::info;

mod application;
mod infrastructure;
mod presentation;
mod server;

use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use infrastructure::watcher::AssetWatcher;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level, settings.dev_mode)?;

    let state = AppState::new(settings.clone())?;

    let watcher = if settings.dev_mode {
        info!(
            upstream = %settings.api_upstream,
            strict_mode = settings.dev.strict_mode,
            "dev mode: forwarding /api/* to backend"
        );
        let watcher = AssetWatcher::new(
            settings.static_dir.clone(),
            &settings.dev,
            state.asset_version.clone(),
        );
        Some(watcher.spawn())
    } else {
        None
    };

    let result = server::run_http(&settings, state).await;

    if let Some(handle) = watcher {
        handle.abort();
    }
    result
}

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};

/// Параметры dev-инструментов: строгий рендер, наблюдение за статикой,
/// маршрутизация по реестру страниц.
#[derive(Debug, Clone)]
pub struct DevSettings {
    pub strict_mode: bool,
    pub watch_poll_ms: u64,
    pub watch_aggregate_timeout_ms: u64,
    pub app_dir: bool,
}

impl DevSettings {
    pub fn watch_poll(&self) -> Duration {
        Duration::from_millis(self.watch_poll_ms)
    }

    pub fn watch_aggregate_timeout(&self) -> Duration {
        Duration::from_millis(self.watch_aggregate_timeout_ms)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub http_addr: String,
    pub log_level: String,
    pub dev_mode: bool,
    pub api_upstream: String,
    pub proxy_timeout_secs: u64,
    pub proxy_body_limit_bytes: usize,
    pub static_dir: PathBuf,
    pub dev: DevSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Собирает настройки из произвольного источника `key -> value`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = Env(&lookup);

        let http_addr = env.string("HTTP_ADDR", "0.0.0.0:3000");
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let dev_mode = env.bool("DEV_MODE", true)?;
        let api_upstream = parse_upstream(&env.string("API_UPSTREAM", "http://localhost:8000"))?;
        let proxy_timeout_secs = env.u64("PROXY_TIMEOUT_SECS", 30)?;
        let proxy_body_limit_bytes = env.usize("PROXY_BODY_LIMIT_BYTES", 10 * 1024 * 1024)?;
        let static_dir = PathBuf::from(env.string("STATIC_DIR", "static"));

        let dev = DevSettings {
            strict_mode: env.bool("STRICT_MODE", true)?,
            watch_poll_ms: env.u64("WATCH_POLL_MS", 1000)?,
            watch_aggregate_timeout_ms: env.u64("WATCH_AGGREGATE_TIMEOUT_MS", 300)?,
            app_dir: env.bool("APP_DIR", true)?,
        };

        if !dev.app_dir {
            return Err(anyhow!(
                "APP_DIR=false is not supported: pages are routed only from the page registry"
            ));
        }

        Ok(Self {
            http_addr,
            log_level,
            dev_mode,
            api_upstream,
            proxy_timeout_secs,
            proxy_body_limit_bytes,
            static_dir,
            dev,
        })
    }

    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_secs(self.proxy_timeout_secs)
    }
}

struct Env<'a, F>(&'a F);

impl<F: Fn(&str) -> Option<String>> Env<'_, F> {
    fn raw(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn string(&self, key: &str, default: &str) -> String {
        self.raw(key).unwrap_or_else(|| default.to_string())
    }

    fn bool(&self, key: &str, default: bool) -> Result<bool> {
        let Some(value) = self.raw(key) else {
            return Ok(default);
        };
        match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(anyhow!("Failed to parse {key}, expecting boolean, got '{value}'")),
        }
    }

    fn u64(&self, key: &str, default: u64) -> Result<u64> {
        let value = self
            .string(key, &default.to_string())
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

        if value == 0 {
            return Err(anyhow!("{key} must be > 0"));
        }
        Ok(value)
    }

    fn usize(&self, key: &str, default: usize) -> Result<usize> {
        let value = self
            .string(key, &default.to_string())
            .parse::<usize>()
            .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

        if value == 0 {
            return Err(anyhow!("{key} must be > 0"));
        }
        Ok(value)
    }
}

fn parse_upstream(raw: &str) -> Result<String> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(anyhow!("API_UPSTREAM must start with http:// or https://, got '{raw}'"));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

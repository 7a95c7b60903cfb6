use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Инициализирует глобальный subscriber. В dev-режиме вывод многострочный,
/// иначе компактный.
pub fn init_logging(default_level: &str, dev_mode: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_target(true);
    let result = if dev_mode {
        builder.pretty().try_init()
    } else {
        builder.compact().try_init()
    };

    result.map_err(|e| anyhow!("failed to init logging: {e}"))
}

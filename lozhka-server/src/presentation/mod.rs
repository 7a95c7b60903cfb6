use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::application::proxy::{ProxyRule, ProxyService};
use crate::infrastructure::settings::Settings;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) settings: Arc<Settings>,
    /// `None`, если dev-прокси выключен.
    pub(crate) proxy: Option<Arc<ProxyService>>,
    pub(crate) asset_version: Arc<AtomicU64>,
}

impl AppState {
    pub(crate) fn new(settings: Settings) -> anyhow::Result<Self> {
        let proxy = if settings.dev_mode {
            let service = ProxyService::new(
                ProxyRule::api(settings.api_upstream.clone()),
                settings.proxy_timeout(),
                settings.proxy_body_limit_bytes,
            )?;
            Some(Arc::new(service))
        } else {
            None
        };

        Ok(Self {
            settings: Arc::new(settings),
            proxy,
            asset_version: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Строгий рендер действует только в dev-режиме.
    pub(crate) fn strict_render(&self) -> bool {
        self.settings.dev_mode && self.settings.dev.strict_mode
    }

    pub(crate) fn asset_version(&self) -> u64 {
        self.asset_version.load(Ordering::Relaxed)
    }
}

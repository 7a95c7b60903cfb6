use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use notify::{Config, Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::infrastructure::settings::DevSettings;

/// Опрашивает каталог статики через `notify::PollWatcher` и увеличивает
/// версию статики, когда изменения затихли на `aggregate_timeout`.
///
/// Опрос вместо системных уведомлений: контейнеры и сетевые тома их
/// часто не доставляют.
pub(crate) struct AssetWatcher {
    dir: PathBuf,
    poll: Duration,
    aggregate_timeout: Duration,
    version: Arc<AtomicU64>,
}

impl AssetWatcher {
    pub(crate) fn new(dir: PathBuf, dev: &DevSettings, version: Arc<AtomicU64>) -> Self {
        Self {
            dir,
            poll: dev.watch_poll(),
            aggregate_timeout: dev.watch_aggregate_timeout(),
            version,
        }
    }

    pub(crate) fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(self) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let config = Config::default().with_poll_interval(self.poll);

        let mut watcher = match PollWatcher::new(
            move |event: notify::Result<Event>| {
                let _ = tx.send(event);
            },
            config,
        ) {
            Ok(watcher) => watcher,
            Err(err) => {
                warn!("failed to create static assets watcher: {err}");
                return;
            }
        };

        if let Err(err) = watcher.watch(&self.dir, RecursiveMode::Recursive) {
            warn!(dir = %self.dir.display(), "failed to watch static assets: {err}");
            return;
        }

        info!(
            dir = %self.dir.display(),
            poll_ms = self.poll.as_millis() as u64,
            aggregate_timeout_ms = self.aggregate_timeout.as_millis() as u64,
            "watching static assets"
        );

        while let Some(event) = rx.recv().await {
            let mut changed = BTreeSet::new();
            collect_changes(event, &mut changed);

            // Пачка закрывается, когда за `aggregate_timeout` не пришло
            // ни одного события.
            while let Ok(Some(event)) = tokio::time::timeout(self.aggregate_timeout, rx.recv()).await {
                debug!("static assets still changing");
                collect_changes(event, &mut changed);
            }

            if changed.is_empty() {
                continue;
            }

            let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
            info!(changed = changed.len(), version, "static assets changed");
        }
    }
}

/// Добавляет в `changed` пути из событий создания, изменения и удаления.
/// Остальные события и ошибки опроса версию не двигают.
fn collect_changes(event: notify::Result<Event>, changed: &mut BTreeSet<PathBuf>) {
    match event {
        Ok(event) => {
            if matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            ) {
                changed.extend(event.paths);
            }
        }
        Err(err) => warn!("static assets watch error: {err}"),
    }
}

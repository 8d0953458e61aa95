use super::FileRouter;
use crate::ports::inbound::EditorEvents;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Delay between the last change of a document and its re-analysis
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(3000);

/// How far a pending delayed trigger reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebounceScope {
    /// One pending trigger for the whole process: an event on any document
    /// cancels the trigger scheduled for another one
    #[default]
    Process,
    /// One pending trigger per document URI
    Document,
}

struct PendingTrigger {
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl PendingTrigger {
    fn cancel(self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.task.abort();
    }
}

/// TriggerController - turns editor lifecycle events into analysis dispatches
///
/// - open: dispatch immediately with the opened text
/// - save: cancel the pending trigger, dispatch immediately with the stored text
/// - change: store the text, cancel the pending trigger, schedule a new one
///   that dispatches the latest stored text once the delay elapses
/// - close: cancel the pending trigger without dispatching
///
/// Pending triggers are tokio tasks on the runtime the controller was created in.
pub struct TriggerController {
    router: Arc<FileRouter>,
    delay: Duration,
    scope: DebounceScope,
    pending: Mutex<HashMap<String, PendingTrigger>>,
    runtime: Handle,
}

impl TriggerController {
    /// Creates a controller bound to the current tokio runtime
    ///
    /// # Errors
    /// Returns an error when called outside a tokio runtime
    pub fn new(router: Arc<FileRouter>, delay: Duration, scope: DebounceScope) -> Result<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| anyhow::anyhow!("Trigger controller requires a tokio runtime: {}", e))?;
        Ok(Self {
            router,
            delay,
            scope,
            pending: Mutex::new(HashMap::new()),
            runtime,
        })
    }

    pub fn router(&self) -> &Arc<FileRouter> {
        &self.router
    }

    /// Number of delayed triggers that have not fired or been cancelled yet
    pub fn pending_count(&self) -> usize {
        self.lock_pending()
            .values()
            .filter(|p| !p.task.is_finished())
            .count()
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, HashMap<String, PendingTrigger>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn timer_key(&self, uri: &str) -> String {
        match self.scope {
            DebounceScope::Process => String::new(),
            DebounceScope::Document => uri.to_string(),
        }
    }

    fn cancel_pending(&self, uri: &str) {
        if let Some(pending) = self.lock_pending().remove(&self.timer_key(uri)) {
            tracing::trace!(%uri, "cancelling pending analysis trigger");
            pending.cancel();
        }
    }

    fn schedule(&self, uri: &str) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let router = Arc::clone(&self.router);
        let delay = self.delay;
        let task_uri = uri.to_string();
        let task_cancelled = Arc::clone(&cancelled);

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if task_cancelled.load(Ordering::SeqCst) {
                return;
            }
            match router.contents(&task_uri) {
                Some(contents) => {
                    tracing::debug!(uri = %task_uri, "debounce elapsed, dispatching");
                    router.handle_file_event(&task_uri, &contents);
                }
                None => tracing::debug!(uri = %task_uri, "debounce elapsed but document contents are gone"),
            }
        });

        let previous = {
            let mut pending = self.lock_pending();
            // Fired timers are dropped here so per-document keys do not accumulate
            pending.retain(|_, p| !p.task.is_finished());
            pending.insert(self.timer_key(uri), PendingTrigger { cancelled, task })
        };
        if let Some(previous) = previous {
            previous.cancel();
        }
        tracing::trace!(%uri, delay_ms = delay.as_millis() as u64, "scheduled analysis trigger");
    }
}

impl EditorEvents for TriggerController {
    fn did_open(&self, uri: &str, text: &str) {
        self.router.handle_file_event(uri, text);
    }

    fn did_save(&self, uri: &str) {
        self.cancel_pending(uri);
        match self.router.contents(uri) {
            Some(contents) => {
                self.router.handle_file_event(uri, &contents);
            }
            None => tracing::debug!(%uri, "save for a document with no known contents, ignoring"),
        }
    }

    fn did_change(&self, uri: &str, text: &str) {
        self.router.store(uri, text);
        self.cancel_pending(uri);
        self.schedule(uri);
    }

    fn did_close(&self, uri: &str) {
        self.cancel_pending(uri);
        if self.scope == DebounceScope::Document {
            self.router.forget(uri);
        }
    }
}

impl Drop for TriggerController {
    fn drop(&mut self) {
        for (_, pending) in self.lock_pending().drain() {
            pending.cancel();
        }
    }
}

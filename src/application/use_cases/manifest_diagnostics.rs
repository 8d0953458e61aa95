use super::ComponentAnalysisUseCase;
use crate::analysis::domain::ManifestKind;
use crate::application::dispatch::{EventStream, FileEventHandler, FileRouter};
use crate::application::dto::{AnalysisRequest, SettingsStore};
use crate::ports::outbound::{DiagnosticsSink, ScanningEngine, WarningNotifier};
use crate::shared::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Counts analyses that have been started but not yet delivered to the sink
#[derive(Default)]
pub struct AnalysisTracker {
    running: AtomicUsize,
    idle: Notify,
}

impl AnalysisTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn running(&self) -> usize {
        self.running.load(Ordering::SeqCst)
    }

    fn begin(self: &Arc<Self>) -> TrackedAnalysis {
        self.running.fetch_add(1, Ordering::SeqCst);
        TrackedAnalysis {
            tracker: Arc::clone(self),
        }
    }

    /// Resolves once no analysis is running
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.running() == 0 {
                return;
            }
            notified.await;
        }
    }
}

struct TrackedAnalysis {
    tracker: Arc<AnalysisTracker>,
}

impl Drop for TrackedAnalysis {
    fn drop(&mut self) {
        if self.tracker.running.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.tracker.idle.notify_waiters();
        }
    }
}

/// ManifestAnalysisHandler - analysis pipeline for one manifest kind
///
/// Registered on the file router for its manifest's file name. Each dispatch
/// snapshots the current settings and runs the analysis in the background;
/// the outcome goes to the diagnostics sink. Analyses of the same or of
/// different documents may overlap and finish in any order.
pub struct ManifestAnalysisHandler<E, W> {
    kind: ManifestKind,
    use_case: Arc<ComponentAnalysisUseCase<E, W>>,
    settings: Arc<SettingsStore>,
    sink: Arc<dyn DiagnosticsSink>,
    tracker: Arc<AnalysisTracker>,
    runtime: Handle,
}

impl<E, W> ManifestAnalysisHandler<E, W>
where
    E: ScanningEngine + 'static,
    W: WarningNotifier + 'static,
{
    /// # Errors
    /// Returns an error when called outside a tokio runtime
    pub fn new(
        kind: ManifestKind,
        use_case: Arc<ComponentAnalysisUseCase<E, W>>,
        settings: Arc<SettingsStore>,
        sink: Arc<dyn DiagnosticsSink>,
        tracker: Arc<AnalysisTracker>,
    ) -> Result<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| anyhow::anyhow!("Manifest handler requires a tokio runtime: {}", e))?;
        Ok(Self {
            kind,
            use_case,
            settings,
            sink,
            tracker,
            runtime,
        })
    }

    /// Starts an analysis of `contents` and returns its task handle
    pub fn analyze(&self, uri: &str, contents: &str) -> JoinHandle<()> {
        let request = AnalysisRequest::new(self.kind.file_type(), contents);
        let settings = self.settings.snapshot();
        let use_case = Arc::clone(&self.use_case);
        let sink = Arc::clone(&self.sink);
        let uri = uri.to_string();
        let tracked = self.tracker.begin();

        self.runtime.spawn(async move {
            let _tracked = tracked;
            match use_case.execute(&request, &settings).await {
                Ok(response) => sink.publish(&uri, &response),
                Err(err) => sink.report_failure(&uri, &err),
            }
        })
    }
}

impl<E, W> FileEventHandler for ManifestAnalysisHandler<E, W>
where
    E: ScanningEngine + 'static,
    W: WarningNotifier + 'static,
{
    fn handle(&self, uri: &str, _file_name: &str, contents: &str) {
        tracing::debug!(%uri, manifest = %self.kind, "queueing manifest analysis");
        self.analyze(uri, contents);
    }
}

/// Registers one analysis handler per supported manifest on the diagnostics stream
///
/// Handlers are registered in [`ManifestKind::ALL`] order.
pub fn register_manifest_handlers<E, W>(
    router: FileRouter,
    use_case: Arc<ComponentAnalysisUseCase<E, W>>,
    settings: Arc<SettingsStore>,
    sink: Arc<dyn DiagnosticsSink>,
    tracker: Arc<AnalysisTracker>,
) -> Result<FileRouter>
where
    E: ScanningEngine + 'static,
    W: WarningNotifier + 'static,
{
    ManifestKind::ALL.into_iter().try_fold(router, |router, kind| {
        let handler = ManifestAnalysisHandler::new(
            kind,
            Arc::clone(&use_case),
            Arc::clone(&settings),
            Arc::clone(&sink),
            Arc::clone(&tracker),
        )?;
        router.on(EventStream::Diagnostics, kind.pattern(), handler)
    })
}

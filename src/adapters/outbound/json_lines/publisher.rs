use crate::ports::outbound::{AnalysisResponse, DiagnosticsSink, WarningNotifier};
use crate::shared::Result;
use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;

/// One line written to the editor
#[derive(Debug, Serialize)]
#[serde(tag = "notification")]
pub enum Notification<'a> {
    #[serde(rename = "caSimpleWarning")]
    Warning { message: &'a str },
    #[serde(rename = "diagnostics")]
    Diagnostics {
        uri: &'a str,
        analysis: &'a AnalysisResponse,
    },
    #[serde(rename = "analysisFailed")]
    AnalysisFailed { uri: &'a str, message: String },
}

/// JsonLinesPublisher adapter writing analyses and warnings as JSON lines
///
/// Each notification is serialized on its own line and flushed immediately.
/// Write failures are logged and dropped; the editor side going away must not
/// take down running analyses.
pub struct JsonLinesPublisher<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesPublisher<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn send(&self, notification: &Notification<'_>) -> Result<()> {
        let line = serde_json::to_string(notification)?;
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }

    fn send_or_log(&self, notification: &Notification<'_>) {
        if let Err(e) = self.send(notification) {
            tracing::error!(error = %e, "failed to write notification");
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> WarningNotifier for JsonLinesPublisher<W> {
    fn warn(&self, message: &str) {
        self.send_or_log(&Notification::Warning { message });
    }
}

impl<W: Write + Send> DiagnosticsSink for JsonLinesPublisher<W> {
    fn publish(&self, uri: &str, response: &AnalysisResponse) {
        self.send_or_log(&Notification::Diagnostics {
            uri,
            analysis: response,
        });
    }

    fn report_failure(&self, uri: &str, error: &anyhow::Error) {
        self.send_or_log(&Notification::AnalysisFailed {
            uri,
            message: error.to_string(),
        });
    }
}

use super::AnalysisResponse;

/// DiagnosticsSink port receiving finished analyses
///
/// This is where the editor-facing diagnostics layer plugs in. Rendering
/// diagnostics or code actions from the index is up to the implementation.
pub trait DiagnosticsSink: Send + Sync {
    /// Called with the result of a successful analysis of the document at `uri`
    fn publish(&self, uri: &str, response: &AnalysisResponse);

    /// Called when the analysis of the document at `uri` failed
    ///
    /// The failure only affects this attempt; the next open, save, or
    /// settled change of the document triggers a fresh analysis.
    fn report_failure(&self, uri: &str, error: &anyhow::Error);
}

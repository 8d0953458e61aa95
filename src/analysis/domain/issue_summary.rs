use super::Severity;
use serde::Serialize;

/// Vulnerability summary for one dependency as seen by one source
///
/// Value object: built once by the aggregator and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyIssueSummary {
    source_id: String,
    issue_count: usize,
    highest_severity: Severity,
}

impl DependencyIssueSummary {
    pub fn new(source_id: String, issue_count: usize, highest_severity: Severity) -> Self {
        Self {
            source_id,
            issue_count,
            highest_severity,
        }
    }

    /// Source that reported this summary, formatted `<provider>-<source>`
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn issue_count(&self) -> usize {
        self.issue_count
    }

    /// Worst severity in the closed vocabulary. The provider's own label is
    /// not kept, so labels such as `NONE` or `INFO` read back as `Unknown`.
    pub fn highest_severity(&self) -> Severity {
        self.highest_severity
    }
}

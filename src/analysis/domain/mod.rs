pub mod analysis_index;
pub mod issue_summary;
pub mod manifest_kind;
pub mod raw_report;
pub mod severity;
pub mod source;

pub use analysis_index::AnalysisIndex;
pub use issue_summary::DependencyIssueSummary;
pub use manifest_kind::ManifestKind;
pub use raw_report::field;
pub use severity::Severity;
pub use source::Source;

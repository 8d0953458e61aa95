/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (scanning engine, file system, editor, console).
pub mod analysis_response;
pub mod diagnostics_sink;
pub mod manifest_reader;
pub mod output_presenter;
pub mod scanning_engine;
pub mod warning_notifier;

pub use analysis_response::AnalysisResponse;
pub use diagnostics_sink::DiagnosticsSink;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use scanning_engine::{InvocationOptions, ScanningEngine};
pub use warning_notifier::WarningNotifier;

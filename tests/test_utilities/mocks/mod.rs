/// Mock implementations for testing
mod mock_diagnostics_sink;
mod mock_scanning_engine;
mod mock_warning_notifier;

pub use mock_diagnostics_sink::{MockDiagnosticsSink, SinkEvent};
pub use mock_scanning_engine::MockScanningEngine;
pub use mock_warning_notifier::MockWarningNotifier;

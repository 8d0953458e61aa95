/// Console adapters writing to stderr
mod spinner;
mod warning_notifier;

pub use spinner::AnalysisSpinner;
pub use warning_notifier::ConsoleWarningNotifier;

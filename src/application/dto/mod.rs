/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_request;
mod invocation_options;
mod settings;

pub use analysis_request::AnalysisRequest;
pub use invocation_options::{build_invocation_options, ClientIdentity};
pub use settings::{Settings, SettingsStore};

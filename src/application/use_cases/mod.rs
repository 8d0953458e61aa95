/// Use cases module containing application business logic orchestration
mod component_analysis;
mod manifest_diagnostics;

pub use component_analysis::ComponentAnalysisUseCase;
pub use manifest_diagnostics::{register_manifest_handlers, AnalysisTracker, ManifestAnalysisHandler};

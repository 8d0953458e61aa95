//! dependency-analytics - vulnerability checks for project manifests
//!
//! This library watches manifest documents (`package.json`, `pom.xml`,
//! `go.mod`, `requirements.txt`) as an editor reports changes to them,
//! decides when each one has to be re-analyzed, runs the analysis through
//! an external scanning engine, and reduces the multi-provider report into a
//! per-dependency index for the diagnostics layer.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`analysis`): Severity model, the dependency index and
//!   the report aggregator
//! - **Application Layer** (`application`): Event dispatch, debouncing, use
//!   cases and DTOs
//! - **Ports** (`ports`): Interface definitions for the editor and infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dependency_analytics::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let engine = ProcessScanningEngine::new("exhort", vec![]);
//! let use_case = ComponentAnalysisUseCase::new(
//!     engine,
//!     ConsoleWarningNotifier::new(),
//!     ClientIdentity::default(),
//! );
//!
//! let request = AnalysisRequest::new("go.mod", "module example.com/app\n");
//! let response = use_case.execute(&request, &Settings::default()).await?;
//! for (reference, summaries) in response.dependencies.iter() {
//!     println!("{}: {} source(s)", reference, summaries.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod analysis;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::{EditorEvent, EventReader};
    pub use crate::adapters::outbound::console::{AnalysisSpinner, ConsoleWarningNotifier};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemManifestReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::json_lines::JsonLinesPublisher;
    pub use crate::adapters::outbound::process::ProcessScanningEngine;
    pub use crate::analysis::domain::{
        AnalysisIndex, DependencyIssueSummary, ManifestKind, Severity,
    };
    pub use crate::analysis::services::Aggregator;
    pub use crate::application::dispatch::{
        DebounceScope, EventStream, FileEventHandler, FileRouter, TriggerController,
    };
    pub use crate::application::dto::{AnalysisRequest, ClientIdentity, Settings, SettingsStore};
    pub use crate::application::use_cases::{
        register_manifest_handlers, AnalysisTracker, ComponentAnalysisUseCase,
    };
    pub use crate::config::ServerConfig;
    pub use crate::ports::inbound::EditorEvents;
    pub use crate::ports::outbound::{
        AnalysisResponse, DiagnosticsSink, InvocationOptions, ManifestReader, OutputPresenter,
        ScanningEngine, WarningNotifier,
    };
    pub use crate::shared::Result;
}

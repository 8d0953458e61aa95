use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// Options handed to the scanning engine with every invocation
///
/// Keys are the option names the engine recognises (tool path overrides,
/// telemetry identifiers, feature flags); values are always strings.
pub type InvocationOptions = BTreeMap<String, String>;

/// ScanningEngine port for the external component-analysis engine
///
/// The engine resolves the dependencies declared in a manifest, queries its
/// vulnerability providers, and returns a raw multi-provider report. This
/// crate treats the report as untyped JSON and normalizes it itself.
///
/// # Async Support
/// Invocations may take seconds (the engine shells out to package managers
/// and calls remote providers). Several invocations can be in flight at the
/// same time and are never cancelled once started.
#[async_trait]
pub trait ScanningEngine: Send + Sync {
    /// Runs a component analysis of `contents`
    ///
    /// # Arguments
    /// * `file_type` - Manifest type (e.g. "package.json")
    /// * `contents` - Raw manifest contents
    /// * `options` - Engine configuration for this invocation
    ///
    /// # Errors
    /// Returns an error if the engine cannot be started, reports a failure
    /// (invalid manifest, missing tool, network error), or produces output
    /// that is not JSON
    async fn component_analysis(
        &self,
        file_type: &str,
        contents: &str,
        options: &InvocationOptions,
    ) -> Result<Value>;
}

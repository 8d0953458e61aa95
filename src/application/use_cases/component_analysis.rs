use crate::analysis::services::Aggregator;
use crate::application::dto::{build_invocation_options, AnalysisRequest, ClientIdentity, Settings};
use crate::ports::outbound::{AnalysisResponse, ScanningEngine, WarningNotifier};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use uuid::Uuid;

/// ComponentAnalysisUseCase - runs one manifest through the scanning engine
///
/// Builds the invocation options from the client identity and the settings
/// snapshot passed in by the caller, delegates to the engine, and normalizes
/// the raw report into an [`AnalysisResponse`].
///
/// # Type Parameters
/// * `E` - ScanningEngine implementation
/// * `W` - WarningNotifier implementation receiving partial-failure warnings
pub struct ComponentAnalysisUseCase<E, W> {
    engine: E,
    notifier: W,
    identity: ClientIdentity,
}

impl<E, W> ComponentAnalysisUseCase<E, W>
where
    E: ScanningEngine,
    W: WarningNotifier,
{
    /// Creates a new ComponentAnalysisUseCase with injected dependencies
    pub fn new(engine: E, notifier: W, identity: ClientIdentity) -> Self {
        Self {
            engine,
            notifier,
            identity,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Executes the component analysis
    ///
    /// # Arguments
    /// * `request` - Manifest type and contents to analyze
    /// * `settings` - Settings snapshot used for this invocation only
    ///
    /// # Errors
    /// Returns [`AnalysisError::Invocation`] when the engine call fails. The
    /// failure is not retried here. Provider-level failures inside a
    /// successful report are not errors; they produce a warning and a
    /// partial index.
    pub async fn execute(
        &self,
        request: &AnalysisRequest,
        settings: &Settings,
    ) -> Result<AnalysisResponse> {
        let request_id = Uuid::new_v4();
        let options = build_invocation_options(&self.identity, settings);

        tracing::info!(
            %request_id,
            file_type = %request.file_type,
            bytes = request.contents.len(),
            "starting component analysis"
        );

        let report = self
            .engine
            .component_analysis(&request.file_type, &request.contents, &options)
            .await
            .map_err(|err| {
                tracing::error!(%request_id, file_type = %request.file_type, error = %err, "component analysis failed");
                into_invocation_error(&request.file_type, err)
            })?;

        let index = Aggregator::aggregate(&report, &self.notifier);

        tracing::info!(
            %request_id,
            dependencies = index.len(),
            issues = index.total_issues(),
            "component analysis finished"
        );

        Ok(AnalysisResponse::new(
            request_id,
            request.file_type.clone(),
            index,
        ))
    }
}

fn into_invocation_error(file_type: &str, err: anyhow::Error) -> anyhow::Error {
    if matches!(
        err.downcast_ref::<AnalysisError>(),
        Some(AnalysisError::Invocation { .. })
    ) {
        return err;
    }
    AnalysisError::Invocation {
        file_type: file_type.to_string(),
        details: format!("{:#}", err),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::Severity;
    use crate::ports::outbound::InvocationOptions;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct MockScanningEngine {
        report: Option<Value>,
        calls: Mutex<Vec<(String, String, InvocationOptions)>>,
    }

    impl MockScanningEngine {
        fn returning(report: Value) -> Self {
            Self {
                report: Some(report),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                report: None,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ScanningEngine for MockScanningEngine {
        async fn component_analysis(
            &self,
            file_type: &str,
            contents: &str,
            options: &InvocationOptions,
        ) -> Result<Value> {
            self.calls.lock().unwrap().push((
                file_type.to_string(),
                contents.to_string(),
                options.clone(),
            ));
            match &self.report {
                Some(report) => Ok(report.clone()),
                None => anyhow::bail!("npm: command not found"),
            }
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        warnings: Mutex<Vec<String>>,
    }

    impl WarningNotifier for MockNotifier {
        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }

    fn sample_report() -> Value {
        json!({
            "providers": {
                "snyk": {"status": {"ok": false}},
                "oss-index": {
                    "status": {"ok": true},
                    "sources": {
                        "oss-index": {"dependencies": [
                            {"ref": "pkg:npm/minimist@1.2.5", "issues": [{}], "highestVulnerability": {"severity": "CRITICAL"}}
                        ]}
                    }
                }
            }
        })
    }

    #[tokio::test]
    async fn test_execute_aggregates_report() {
        let use_case = ComponentAnalysisUseCase::new(
            MockScanningEngine::returning(sample_report()),
            MockNotifier::default(),
            ClientIdentity::default(),
        );

        let request = AnalysisRequest::new("package.json", "{\"name\":\"app\"}");
        let response = use_case.execute(&request, &Settings::default()).await.unwrap();

        assert_eq!(response.file_type, "package.json");
        assert_eq!(
            response
                .dependencies
                .worst_severity("pkg:npm/minimist@1.2.5"),
            Some(Severity::Critical)
        );
        let warnings = use_case.notifier.warnings.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("[snyk]"));
    }

    #[tokio::test]
    async fn test_execute_passes_contents_and_options() {
        let use_case = ComponentAnalysisUseCase::new(
            MockScanningEngine::returning(json!({})),
            MockNotifier::default(),
            ClientIdentity::default(),
        );
        let settings = Settings {
            provider_token: "secret".to_string(),
            ..Settings::default()
        };

        let request = AnalysisRequest::new("go.mod", "module example.com/app\n");
        let response = use_case.execute(&request, &settings).await.unwrap();

        assert!(response.dependencies.is_empty());
        let calls = use_case.engine.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "go.mod");
        assert_eq!(calls[0].1, "module example.com/app\n");
        assert_eq!(
            calls[0].2.get("EXHORT_SNYK_TOKEN").map(String::as_str),
            Some("secret")
        );
    }

    #[tokio::test]
    async fn test_execute_propagates_invocation_error() {
        let use_case = ComponentAnalysisUseCase::new(
            MockScanningEngine::failing(),
            MockNotifier::default(),
            ClientIdentity::default(),
        );

        let request = AnalysisRequest::new("package.json", "{}");
        let err = use_case
            .execute(&request, &Settings::default())
            .await
            .unwrap_err();

        match err.downcast_ref::<AnalysisError>() {
            Some(AnalysisError::Invocation { file_type, details }) => {
                assert_eq!(file_type, "package.json");
                assert!(details.contains("command not found"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(use_case.notifier.warnings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_each_execution_gets_fresh_request_id() {
        let use_case = ComponentAnalysisUseCase::new(
            MockScanningEngine::returning(sample_report()),
            MockNotifier::default(),
            ClientIdentity::default(),
        );
        let request = AnalysisRequest::new("package.json", "{}");

        let first = use_case.execute(&request, &Settings::default()).await.unwrap();
        let second = use_case.execute(&request, &Settings::default()).await.unwrap();

        assert_ne!(first.request_id, second.request_id);
        assert_eq!(first.dependencies, second.dependencies);
    }
}

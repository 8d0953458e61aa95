use async_trait::async_trait;
use dependency_analytics::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One recorded engine invocation
#[derive(Debug, Clone)]
pub struct EngineCall {
    pub file_type: String,
    pub contents: String,
    pub options: InvocationOptions,
}

/// Mock ScanningEngine returning canned reports per file type
#[derive(Default, Clone)]
pub struct MockScanningEngine {
    reports: HashMap<String, Value>,
    failures: HashMap<String, String>,
    pub calls: Arc<Mutex<Vec<EngineCall>>>,
}

impl MockScanningEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, file_type: &str, report: Value) -> Self {
        self.reports.insert(file_type.to_string(), report);
        self
    }

    pub fn with_failure(mut self, file_type: &str, message: &str) -> Self {
        self.failures
            .insert(file_type.to_string(), message.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
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
        self.calls.lock().unwrap().push(EngineCall {
            file_type: file_type.to_string(),
            contents: contents.to_string(),
            options: options.clone(),
        });

        if let Some(message) = self.failures.get(file_type) {
            anyhow::bail!("{}", message);
        }
        Ok(self
            .reports
            .get(file_type)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({})))
    }
}

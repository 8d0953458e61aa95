use dependency_analytics::prelude::*;
use std::sync::{Arc, Mutex};

/// What the sink was told about one document
#[derive(Debug, Clone)]
pub enum SinkEvent {
    Published { uri: String, response: AnalysisResponse },
    Failed { uri: String, message: String },
}

/// Mock DiagnosticsSink that captures published analyses and failures
#[derive(Default, Clone)]
pub struct MockDiagnosticsSink {
    pub events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl MockDiagnosticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn published(&self) -> Vec<(String, AnalysisResponse)> {
        self.get_events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Published { uri, response } => Some((uri, response)),
                SinkEvent::Failed { .. } => None,
            })
            .collect()
    }
}

impl DiagnosticsSink for MockDiagnosticsSink {
    fn publish(&self, uri: &str, response: &AnalysisResponse) {
        self.events.lock().unwrap().push(SinkEvent::Published {
            uri: uri.to_string(),
            response: response.clone(),
        });
    }

    fn report_failure(&self, uri: &str, error: &anyhow::Error) {
        self.events.lock().unwrap().push(SinkEvent::Failed {
            uri: uri.to_string(),
            message: error.to_string(),
        });
    }
}

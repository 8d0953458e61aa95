use crate::analysis::domain::AnalysisIndex;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// AnalysisResponse carries one finished analysis to the diagnostics layer
///
/// The index is built fresh for every invocation; nothing is cached between
/// requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub request_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub file_type: String,
    pub dependencies: AnalysisIndex,
}

impl AnalysisResponse {
    pub fn new(request_id: Uuid, file_type: String, dependencies: AnalysisIndex) -> Self {
        Self {
            request_id,
            analyzed_at: Utc::now(),
            file_type,
            dependencies,
        }
    }
}

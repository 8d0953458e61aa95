/// AnalysisRequest - Input of the component analysis use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Manifest type understood by the scanning engine (e.g. "pom.xml")
    pub file_type: String,
    /// Full manifest contents as last seen by the editor
    pub contents: String,
}

impl AnalysisRequest {
    pub fn new(file_type: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_type: file_type.into(),
            contents: contents.into(),
        }
    }
}

use serde_json::Value;

/// One (provider, sub-source) pair that contributed dependency records
///
/// Only lives for the duration of an aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    id: String,
    dependencies: Vec<Value>,
}

impl Source {
    pub fn new(provider: &str, source: &str, dependencies: Vec<Value>) -> Self {
        Self {
            id: format!("{}-{}", provider, source),
            dependencies,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dependencies(&self) -> &[Value] {
        &self.dependencies
    }
}

use dependency_analytics::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock WarningNotifier that captures warnings
#[derive(Default, Clone)]
pub struct MockWarningNotifier {
    pub warnings: Arc<Mutex<Vec<String>>>,
}

impl MockWarningNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl WarningNotifier for MockWarningNotifier {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

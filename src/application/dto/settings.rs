use crate::analysis::domain::field;
use serde::Deserialize;
use serde_json::Value;
use std::sync::{Arc, RwLock};

/// User-facing analysis settings
///
/// A snapshot is taken for every analysis; changing the configuration
/// replaces the whole value rather than mutating fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Token for the optional authenticated vulnerability provider; empty when unset
    pub provider_token: String,
    pub match_manifest_versions: bool,
    pub mvn_path: String,
    pub npm_path: String,
    pub go_path: String,
    pub python3_path: String,
    pub pip3_path: String,
    pub python_path: String,
    pub pip_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider_token: String::new(),
            match_manifest_versions: true,
            mvn_path: "mvn".to_string(),
            npm_path: "npm".to_string(),
            go_path: "go".to_string(),
            python3_path: "python3".to_string(),
            pip3_path: "pip3".to_string(),
            python_path: "python".to_string(),
            pip_path: "pip".to_string(),
        }
    }
}

impl Settings {
    /// Builds settings from the editor's workspace configuration object
    ///
    /// Executable paths that are missing or empty fall back to the bare
    /// executable name; a missing version-matching flag reads as `false`.
    pub fn from_workspace_configuration(configuration: &Value) -> Self {
        let text = |path: &[&str]| field(configuration, path).and_then(Value::as_str);
        let executable = |tool: &str, fallback: &str| {
            text(&[tool, "executable", "path"])
                .unwrap_or(fallback)
                .to_string()
        };

        Self {
            provider_token: text(&["redHatDependencyAnalytics", "exhortSnykToken"])
                .unwrap_or_default()
                .to_string(),
            match_manifest_versions: field(
                configuration,
                &["redHatDependencyAnalytics", "matchManifestVersions"],
            )
            .is_some(),
            mvn_path: executable("mvn", "mvn"),
            npm_path: executable("npm", "npm"),
            go_path: executable("go", "go"),
            python3_path: executable("python3", "python3"),
            pip3_path: executable("pip3", "pip3"),
            python_path: executable("python", "python"),
            pip_path: executable("pip", "pip"),
        }
    }
}

/// SettingsStore - holds the current settings snapshot
///
/// Readers get an `Arc` to an immutable snapshot, so an analysis keeps the
/// settings it started with even if the configuration changes meanwhile.
#[derive(Debug, Default)]
pub struct SettingsStore {
    current: RwLock<Arc<Settings>>,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            current: RwLock::new(Arc::new(settings)),
        }
    }

    pub fn snapshot(&self) -> Arc<Settings> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Replaces the settings wholesale
    pub fn replace(&self, settings: Settings) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(settings);
    }
}

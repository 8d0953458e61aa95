use crate::application::dto::{Settings, SettingsStore};
use crate::ports::inbound::EditorEvents;
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One editor notification, as read from a JSON line
///
/// ```json
/// {"event":"change","uri":"file:///app/package.json","text":"{...}"}
/// {"event":"configuration","settings":{"redHatDependencyAnalytics":{"matchManifestVersions":true}}}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum EditorEvent {
    Open { uri: String, text: String },
    Save { uri: String },
    Change { uri: String, text: String },
    Close { uri: String },
    /// Workspace configuration changed; replaces the settings wholesale
    Configuration { settings: Value },
}

/// Parses one JSON line into an [`EditorEvent`]
///
/// # Errors
/// Returns [`AnalysisError::InvalidEvent`] when the line is not a known event
pub fn parse_event(line: &str) -> Result<EditorEvent> {
    serde_json::from_str(line).map_err(|e| {
        AnalysisError::InvalidEvent {
            details: e.to_string(),
        }
        .into()
    })
}

/// EventReader - feeds newline-delimited editor events into the application
///
/// Malformed lines are logged and skipped. Reading stops at end of input.
pub struct EventReader<R> {
    input: R,
}

impl<R: AsyncBufRead + Unpin> EventReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Reads events until end of input and returns how many were applied
    ///
    /// # Errors
    /// Returns an error only when reading the input itself fails
    pub async fn run<E: EditorEvents + ?Sized>(
        self,
        events: &E,
        settings: &SettingsStore,
    ) -> Result<usize> {
        let mut lines = self.input.lines();
        let mut applied = 0;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_event(line) {
                Ok(event) => {
                    dispatch(event, events, settings);
                    applied += 1;
                }
                Err(e) => tracing::warn!(error = %e, "skipping editor event"),
            }
        }

        tracing::debug!(applied, "editor event stream closed");
        Ok(applied)
    }
}

fn dispatch<E: EditorEvents + ?Sized>(event: EditorEvent, events: &E, settings: &SettingsStore) {
    match event {
        EditorEvent::Open { uri, text } => {
            tracing::debug!(%uri, "document opened");
            events.did_open(&uri, &text);
        }
        EditorEvent::Save { uri } => {
            tracing::debug!(%uri, "document saved");
            events.did_save(&uri);
        }
        EditorEvent::Change { uri, text } => {
            tracing::trace!(%uri, bytes = text.len(), "document changed");
            events.did_change(&uri, &text);
        }
        EditorEvent::Close { uri } => {
            tracing::debug!(%uri, "document closed");
            events.did_close(&uri);
        }
        EditorEvent::Configuration { settings: workspace } => {
            tracing::info!("workspace configuration changed");
            settings.replace(Settings::from_workspace_configuration(&workspace));
        }
    }
}

use super::EventStream;
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use dashmap::DashMap;
use regex::Regex;
use std::path::Path;

/// Handler invoked when a routed file matches its registration
pub trait FileEventHandler: Send + Sync {
    /// # Arguments
    /// * `uri` - Document URI as sent by the editor
    /// * `file_name` - Basename of the document path
    /// * `contents` - Full document text
    fn handle(&self, uri: &str, file_name: &str, contents: &str);
}

impl<F> FileEventHandler for F
where
    F: Fn(&str, &str, &str) + Send + Sync,
{
    fn handle(&self, uri: &str, file_name: &str, contents: &str) {
        self(uri, file_name, contents)
    }
}

struct HandlerRegistration {
    stream: EventStream,
    pattern: String,
    matcher: Regex,
    handler: Box<dyn FileEventHandler>,
}

/// FileRouter - dispatches document contents to the matching file handler
///
/// Registrations are checked in the order they were added and the first one
/// whose stream matches and whose pattern matches the file name wins. Files
/// matching nothing are ignored.
///
/// The router also remembers the last known contents of every document, so
/// events that carry no text (save, a settled change) can be replayed.
pub struct FileRouter {
    handlers: Vec<HandlerRegistration>,
    file_data: DashMap<String, String>,
}

impl FileRouter {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            file_data: DashMap::new(),
        }
    }

    /// Registers `handler` for file names matching `pattern` on `stream`
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression or
    /// the exact same pattern is already registered for the stream (the
    /// second registration could never be reached).
    pub fn on<H>(mut self, stream: EventStream, pattern: &str, handler: H) -> Result<Self>
    where
        H: FileEventHandler + 'static,
    {
        if self
            .handlers
            .iter()
            .any(|r| r.stream == stream && r.pattern == pattern)
        {
            return Err(AnalysisError::DuplicatePattern {
                pattern: pattern.to_string(),
                stream: stream.to_string(),
            }
            .into());
        }

        let matcher = Regex::new(pattern).map_err(|e| AnalysisError::InvalidPattern {
            pattern: pattern.to_string(),
            details: e.to_string(),
        })?;

        self.handlers.push(HandlerRegistration {
            stream,
            pattern: pattern.to_string(),
            matcher,
            handler: Box::new(handler),
        });
        Ok(self)
    }

    /// Runs the first handler registered for `stream` whose pattern matches `file_name`
    ///
    /// # Returns
    /// `true` if a handler ran, `false` if nothing matched
    pub fn run(&self, stream: EventStream, uri: &str, file_name: &str, contents: &str) -> bool {
        match self
            .handlers
            .iter()
            .find(|r| r.stream == stream && r.matcher.is_match(file_name))
        {
            Some(registration) => {
                tracing::debug!(%uri, file_name, pattern = %registration.pattern, "dispatching file event");
                registration.handler.handle(uri, file_name, contents);
                true
            }
            None => {
                tracing::trace!(%uri, file_name, "no handler registered for file");
                false
            }
        }
    }

    /// Stores `contents` for `uri` and dispatches it on the diagnostics stream
    pub fn handle_file_event(&self, uri: &str, contents: &str) -> bool {
        self.store(uri, contents);
        let file_name = file_name_from_uri(uri);
        self.run(EventStream::Diagnostics, uri, &file_name, contents)
    }

    pub fn store(&self, uri: &str, contents: &str) {
        self.file_data.insert(uri.to_string(), contents.to_string());
    }

    /// Last known contents of the document at `uri`
    pub fn contents(&self, uri: &str) -> Option<String> {
        self.file_data.get(uri).map(|entry| entry.value().clone())
    }

    pub fn forget(&self, uri: &str) {
        self.file_data.remove(uri);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for FileRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the percent-decoded basename of a document URI
///
/// Anything that does not parse as a URL is treated as a plain path.
pub fn file_name_from_uri(uri: &str) -> String {
    match url::Url::parse(uri) {
        Ok(parsed) => {
            let last = parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .unwrap_or_default();
            urlencoding::decode(last)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| last.to_string())
        }
        Err(_) => Path::new(uri)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(String, String, String)>>>;

    fn recorder(tag: &'static str, calls: &Calls) -> impl Fn(&str, &str, &str) + Send + Sync {
        let calls = Arc::clone(calls);
        move |uri: &str, name: &str, contents: &str| {
            calls
                .lock()
                .unwrap()
                .push((tag.to_string(), format!("{}|{}", uri, name), contents.to_string()));
        }
    }

    fn manifest_router(calls: &Calls) -> FileRouter {
        FileRouter::new()
            .on(EventStream::Diagnostics, r"^package\.json$", recorder("npm", calls))
            .unwrap()
            .on(EventStream::Diagnostics, r"^pom\.xml$", recorder("maven", calls))
            .unwrap()
            .on(EventStream::Diagnostics, r"^go\.mod$", recorder("go", calls))
            .unwrap()
            .on(EventStream::Diagnostics, r"^requirements\.txt$", recorder("pypi", calls))
            .unwrap()
    }

    #[test]
    fn test_dispatches_to_matching_handler() {
        let calls = Calls::default();
        let router = manifest_router(&calls);

        assert!(router.run(EventStream::Diagnostics, "file:///p/pom.xml", "pom.xml", "<project/>"));

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "maven");
        assert_eq!(calls[0].2, "<project/>");
    }

    #[test]
    fn test_no_match_is_silent() {
        let calls = Calls::default();
        let router = manifest_router(&calls);

        assert!(!router.run(EventStream::Diagnostics, "file:///p/Cargo.toml", "Cargo.toml", ""));
        assert!(!router.run(EventStream::Diagnostics, "file:///p/x", "my-package.json", ""));
        assert!(!router.run(EventStream::Invalid, "file:///p/go.mod", "go.mod", ""));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_first_registration_wins() {
        let calls = Calls::default();
        let router = FileRouter::new()
            .on(EventStream::Diagnostics, r"\.json$", recorder("first", &calls))
            .unwrap()
            .on(EventStream::Diagnostics, r"^package\.json$", recorder("second", &calls))
            .unwrap();

        router.run(EventStream::Diagnostics, "u", "package.json", "{}");

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "first");
    }

    #[test]
    fn test_stream_must_match() {
        let calls = Calls::default();
        let router = FileRouter::new()
            .on(EventStream::Invalid, r"^go\.mod$", recorder("invalid", &calls))
            .unwrap()
            .on(EventStream::Diagnostics, r"^go\.mod$", recorder("diagnostics", &calls))
            .unwrap();

        router.run(EventStream::Diagnostics, "u", "go.mod", "module x");

        assert_eq!(calls.lock().unwrap()[0].0, "diagnostics");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = FileRouter::new().on(EventStream::Diagnostics, "^(unclosed", |_: &str, _: &str, _: &str| {});
        let err = result.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let noop = |_: &str, _: &str, _: &str| {};
        let result = FileRouter::new()
            .on(EventStream::Diagnostics, r"^go\.mod$", noop)
            .unwrap()
            .on(EventStream::Diagnostics, r"^go\.mod$", noop);
        let err = result.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::DuplicatePattern { .. })
        ));
    }

    #[test]
    fn test_handle_file_event_stores_and_dispatches() {
        let calls = Calls::default();
        let router = manifest_router(&calls);
        let uri = "file:///home/dev/app/requirements.txt";

        assert!(router.handle_file_event(uri, "flask==2.0.0\n"));

        assert_eq!(router.contents(uri).as_deref(), Some("flask==2.0.0\n"));
        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].0, "pypi");
        assert_eq!(calls[0].1, format!("{}|requirements.txt", uri));
    }

    #[test]
    fn test_handle_file_event_stores_even_without_match() {
        let router = FileRouter::new();
        assert!(!router.handle_file_event("file:///app/README.md", "# readme"));
        assert_eq!(router.contents("file:///app/README.md").as_deref(), Some("# readme"));

        router.forget("file:///app/README.md");
        assert!(router.contents("file:///app/README.md").is_none());
    }

    #[test]
    fn test_file_name_from_uri() {
        assert_eq!(file_name_from_uri("file:///home/dev/app/package.json"), "package.json");
        assert_eq!(file_name_from_uri("file:///c%3A/work/pom.xml"), "pom.xml");
        assert_eq!(file_name_from_uri("file:///work/my%20dir/go.mod"), "go.mod");
        assert_eq!(file_name_from_uri("file:///work/odd%20name.txt"), "odd name.txt");
        assert_eq!(file_name_from_uri("/plain/path/requirements.txt"), "requirements.txt");
        assert_eq!(file_name_from_uri("file:///dir/"), "");
    }
}

/// Editor event dispatch: routing changed files to their analysis handler
/// and deciding when a change warrants a new analysis.
mod event_stream;
mod file_router;
mod trigger_controller;

pub use event_stream::EventStream;
pub use file_router::{file_name_from_uri, FileEventHandler, FileRouter};
pub use trigger_controller::{DebounceScope, TriggerController, DEFAULT_DEBOUNCE_DELAY};

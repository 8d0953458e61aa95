/// Inbound adapters - drive the application from outside the process
mod event_reader;

pub use event_reader::{parse_event, EditorEvent, EventReader};

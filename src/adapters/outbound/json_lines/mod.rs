/// JSON-lines adapter speaking to an editor over a byte stream
mod publisher;

pub use publisher::{JsonLinesPublisher, Notification};

/// Scanning engine backed by an external command
mod process_engine;

pub use process_engine::{ProcessScanningEngine, DEFAULT_ENGINE_TIMEOUT};

pub mod aggregator;

pub use aggregator::{failed_providers_message, Aggregation, Aggregator};

/// Analysis domain: the normalized vulnerability model and the aggregation
/// service that builds it from provider reports.
pub mod domain;
pub mod services;

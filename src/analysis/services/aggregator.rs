use crate::analysis::domain::{field, AnalysisIndex, DependencyIssueSummary, Severity, Source};
use crate::ports::outbound::WarningNotifier;
use serde_json::Value;

/// Result of walking a provider report, before any warning is emitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub index: AnalysisIndex,
    /// Providers that reported a non-ok status or no sources, in report order
    pub failed_providers: Vec<String>,
}

/// Aggregator - normalizes a multi-provider analysis report
///
/// Turns the loosely typed `providers -> sources -> dependencies` report
/// returned by the scanning engine into an [`AnalysisIndex`]. Missing or
/// malformed data never fails the aggregation:
/// - providers without an ok status or without sources are recorded as failed
/// - dependency records without a `ref` or without `issues` are skipped
pub struct Aggregator;

impl Aggregator {
    /// Aggregates `report`, sending one warning through `notifier` when any
    /// provider failed
    pub fn aggregate<W>(report: &Value, notifier: &W) -> AnalysisIndex
    where
        W: WarningNotifier + ?Sized,
    {
        let Aggregation {
            index,
            failed_providers,
        } = Self::collect(report);

        if !failed_providers.is_empty() {
            let message = failed_providers_message(&failed_providers);
            tracing::warn!(providers = ?failed_providers, "{}", message);
            notifier.warn(&message);
        }

        index
    }

    /// Walks the report without emitting anything
    pub fn collect(report: &Value) -> Aggregation {
        let Some(providers) = field(report, &["providers"]).and_then(Value::as_object) else {
            return Aggregation::default();
        };

        let mut failed_providers = Vec::new();
        let mut sources = Vec::new();

        for (provider_name, provider_data) in providers {
            let ok = field(provider_data, &["status", "ok"]).is_some();
            match field(provider_data, &["sources"]).and_then(Value::as_object) {
                Some(provider_sources) if ok => {
                    for (source_name, source_data) in provider_sources {
                        let dependencies = field(source_data, &["dependencies"])
                            .and_then(Value::as_array)
                            .cloned()
                            .unwrap_or_default();
                        sources.push(Source::new(provider_name, source_name, dependencies));
                    }
                }
                _ => failed_providers.push(provider_name.clone()),
            }
        }

        let mut index = AnalysisIndex::new();
        for source in &sources {
            for dependency in source.dependencies() {
                if let Some((dependency_ref, summary)) = summarize(source, dependency) {
                    index.push(dependency_ref, summary);
                }
            }
        }

        tracing::debug!(
            sources = sources.len(),
            dependencies = index.len(),
            failed = failed_providers.len(),
            "aggregated analysis report"
        );

        Aggregation {
            index,
            failed_providers,
        }
    }
}

fn summarize<'a>(
    source: &Source,
    dependency: &'a Value,
) -> Option<(&'a str, DependencyIssueSummary)> {
    let dependency_ref = field(dependency, &["ref"])?.as_str()?;
    let issues = field(dependency, &["issues"])?.as_array()?;
    let highest_severity = field(dependency, &["highestVulnerability", "severity"])
        .and_then(Value::as_str)
        .map(Severity::from_label)
        .unwrap_or(Severity::Unknown);

    Some((
        dependency_ref,
        DependencyIssueSummary::new(source.id().to_string(), issues.len(), highest_severity),
    ))
}

/// Human-readable warning naming the providers that could not be used
pub fn failed_providers_message(failed_providers: &[String]) -> String {
    format!(
        "The component analysis couldn't fetch data from the following providers: [{}]",
        failed_providers.join(",")
    )
}

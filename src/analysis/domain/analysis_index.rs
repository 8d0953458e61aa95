use super::{DependencyIssueSummary, Severity};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Per-dependency vulnerability index built from one analysis report
///
/// Maps a dependency reference to the summaries of every source that reported
/// it. Keys iterate in first-insertion order and summaries under a key keep
/// the order they were pushed in, so the same report always yields the same
/// index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisIndex {
    entries: Vec<(String, Vec<DependencyIssueSummary>)>,
    positions: HashMap<String, usize>,
}

impl AnalysisIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a summary under `dependency_ref`, creating the entry if needed
    pub(crate) fn push(&mut self, dependency_ref: &str, summary: DependencyIssueSummary) {
        match self.positions.get(dependency_ref) {
            Some(&position) => self.entries[position].1.push(summary),
            None => {
                self.positions
                    .insert(dependency_ref.to_string(), self.entries.len());
                self.entries
                    .push((dependency_ref.to_string(), vec![summary]));
            }
        }
    }

    pub fn get(&self, dependency_ref: &str) -> Option<&[DependencyIssueSummary]> {
        self.positions
            .get(dependency_ref)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains(&self, dependency_ref: &str) -> bool {
        self.positions.contains_key(dependency_ref)
    }

    /// Number of distinct dependency references
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DependencyIssueSummary])> {
        self.entries
            .iter()
            .map(|(key, summaries)| (key.as_str(), summaries.as_slice()))
    }

    pub fn dependency_refs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Worst severity any source reported for the dependency
    pub fn worst_severity(&self, dependency_ref: &str) -> Option<Severity> {
        self.get(dependency_ref)?
            .iter()
            .map(DependencyIssueSummary::highest_severity)
            .max()
    }

    /// Total number of issues across all dependencies and sources
    pub fn total_issues(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, summaries)| summaries.iter())
            .map(DependencyIssueSummary::issue_count)
            .sum()
    }
}

impl Serialize for AnalysisIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, summaries) in &self.entries {
            map.serialize_entry(key, summaries)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(source: &str, count: usize, severity: Severity) -> DependencyIssueSummary {
        DependencyIssueSummary::new(source.to_string(), count, severity)
    }

    #[test]
    fn test_empty_index() {
        let index = AnalysisIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.get("pkg:npm/lodash@4.17.20").is_none());
        assert_eq!(index.total_issues(), 0);
    }

    #[test]
    fn test_push_groups_by_reference() {
        let mut index = AnalysisIndex::new();
        index.push("lodash@4.17.20", summary("snyk-snyk", 2, Severity::High));
        index.push("lodash@4.17.20", summary("osv-github", 1, Severity::Critical));

        assert_eq!(index.len(), 1);
        let summaries = index.get("lodash@4.17.20").unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].source_id(), "snyk-snyk");
        assert_eq!(summaries[1].source_id(), "osv-github");
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let mut index = AnalysisIndex::new();
        index.push("zlib@1.0", summary("a-a", 1, Severity::Low));
        index.push("alpha@2.0", summary("a-a", 1, Severity::Low));
        index.push("zlib@1.0", summary("b-b", 1, Severity::Low));
        index.push("mid@3.0", summary("a-a", 1, Severity::Low));

        let keys: Vec<&str> = index.dependency_refs().collect();
        assert_eq!(keys, vec!["zlib@1.0", "alpha@2.0", "mid@3.0"]);
    }

    #[test]
    fn test_worst_severity() {
        let mut index = AnalysisIndex::new();
        index.push("requests@2.3.0", summary("a-a", 1, Severity::Medium));
        index.push("requests@2.3.0", summary("b-b", 4, Severity::Critical));
        index.push("requests@2.3.0", summary("c-c", 1, Severity::Unknown));

        assert_eq!(
            index.worst_severity("requests@2.3.0"),
            Some(Severity::Critical)
        );
        assert_eq!(index.worst_severity("missing"), None);
        assert_eq!(index.total_issues(), 6);
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut index = AnalysisIndex::new();
        index.push("b@1", summary("p-s", 1, Severity::Low));
        index.push("a@1", summary("p-s", 2, Severity::High));

        let json = serde_json::to_string(&index).unwrap();
        let b_pos = json.find("\"b@1\"").unwrap();
        let a_pos = json.find("\"a@1\"").unwrap();
        assert!(b_pos < a_pos);
        assert!(json.contains("\"highestSeverity\":\"HIGH\""));
    }
}

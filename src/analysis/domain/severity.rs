use serde::{Serialize, Serializer};
use std::fmt;

/// Highest vulnerability severity reported for a dependency by one source
///
/// Variants are declared in ascending order so the derived `Ord` can be used
/// to pick the worst severity across sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// No severity was reported, or the provider used a label we don't know
    #[default]
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Parses a provider severity label
    ///
    /// Matching is case-insensitive and accepts "MODERATE" as an alias of
    /// `Medium`. Anything unrecognised maps to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "CRITICAL" => Severity::Critical,
            "HIGH" => Severity::High,
            "MODERATE" | "MEDIUM" => Severity::Medium,
            "LOW" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(Severity::from_label("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::from_label("critical"), Severity::Critical);
        assert_eq!(Severity::from_label("HIGH"), Severity::High);
        assert_eq!(Severity::from_label("High"), Severity::High);
        assert_eq!(Severity::from_label("MODERATE"), Severity::Medium);
        assert_eq!(Severity::from_label("medium"), Severity::Medium);
        assert_eq!(Severity::from_label("LOW"), Severity::Low);
        assert_eq!(Severity::from_label("UNKNOWN"), Severity::Unknown);
        assert_eq!(Severity::from_label(""), Severity::Unknown);
        assert_eq!(Severity::from_label("catastrophic"), Severity::Unknown);
        assert_eq!(Severity::from_label("NONE"), Severity::Unknown);
        assert_eq!(Severity::from_label("INFO").as_str(), "UNKNOWN");
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert!(Severity::Low > Severity::Unknown);
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(format!("{}", Severity::High), "HIGH");
        assert_eq!(
            serde_json::to_string(&Severity::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Severity::default(), Severity::Unknown);
    }
}

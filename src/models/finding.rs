use std::collections::BTreeMap;
use std::fmt;

/// Severity tier reported by the image scanner, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    /// Reported by the registry as `INFORMATIONAL`.
    Informational,
    Undefined,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Informational,
        Severity::Undefined,
    ];

    /// Parse a registry severity key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_uppercase().as_str() {
            "CRITICAL" => Some(Severity::Critical),
            "HIGH" => Some(Severity::High),
            "MEDIUM" => Some(Severity::Medium),
            "LOW" => Some(Severity::Low),
            "INFORMAL" | "INFORMATIONAL" => Some(Severity::Informational),
            "UNDEFINED" => Some(Severity::Undefined),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Informational => "INFORMAL",
            Severity::Undefined => "UNDEFINED",
        }
    }

    /// Human label used for message fields.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Informational => "Informational",
            Severity::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Finding counts per severity. Always carries all six severities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityCounts(BTreeMap<Severity, u64>);

impl SeverityCounts {
    /// Build counts from raw registry keys, filling absent severities with zero.
    /// Unrecognised keys are dropped.
    pub fn from_raw<I, K>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut counts: BTreeMap<Severity, u64> = Severity::ALL.iter().map(|s| (*s, 0)).collect();
        for (key, count) in raw {
            if let Some(severity) = Severity::from_key(key.as_ref()) {
                *counts.entry(severity).or_insert(0) += u64::try_from(count).unwrap_or(0);
            }
        }
        Self(counts)
    }

    pub fn get(&self, severity: Severity) -> u64 {
        self.0.get(&severity).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Iterate in severity order, most severe first.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, u64)> + '_ {
        self.0.iter().map(|(s, c)| (*s, *c))
    }
}

impl Default for SeverityCounts {
    fn default() -> Self {
        Self::from_raw(std::iter::empty::<(&str, i64)>())
    }
}

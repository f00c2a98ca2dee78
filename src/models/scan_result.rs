use chrono::{DateTime, Utc};

use super::finding::{Severity, SeverityCounts};

/// Scan findings summary for a single image, as returned by the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary {
    /// Registry (account) id owning the repository.
    pub registry_id: String,
    pub repository_name: String,
    pub image_digest: String,
    /// Tags attached to the image; may be empty for untagged pushes.
    pub image_tags: Vec<String>,
    /// Free-form description of the scan status.
    pub scan_status_description: String,
    pub scan_completed_at: Option<DateTime<Utc>>,
    pub vulnerability_source_updated_at: Option<DateTime<Utc>>,
    pub severity_counts: SeverityCounts,
}

impl ScanSummary {
    /// First image tag, if the image carries any.
    pub fn primary_tag(&self) -> Option<&str> {
        self.image_tags.first().map(String::as_str)
    }

    pub fn count(&self, severity: Severity) -> u64 {
        self.severity_counts.get(severity)
    }

    /// Total number of findings across all severities.
    pub fn total_findings(&self) -> u64 {
        self.severity_counts.total()
    }
}

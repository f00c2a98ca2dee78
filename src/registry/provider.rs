use async_trait::async_trait;
use crate::errors::NotifierError;
use crate::models::ScanSummary;

#[async_trait]
pub trait FindingsSource: Send + Sync {
    /// Fetch the scan findings summary for one image.
    async fn fetch_findings(
        &self,
        repository_name: &str,
        image_digest: &str,
    ) -> Result<ScanSummary, NotifierError>;

    /// Source name for logging
    fn source_name(&self) -> &str;
}

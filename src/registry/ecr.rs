use async_trait::async_trait;
use aws_sdk_ecr::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ecr::primitives::DateTime as SdkDateTime;
use aws_sdk_ecr::types::{ImageDetail, ImageIdentifier};
use aws_sdk_ecr::Client;
use chrono::{DateTime, Utc};
use tracing::{debug, error};

use crate::errors::NotifierError;
use crate::models::{ScanSummary, SeverityCounts};
use super::provider::FindingsSource;

/// Reads scan findings through the ECR `DescribeImages` API.
pub struct EcrFindingsSource {
    client: Client,
}

impl EcrFindingsSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient credential chain, pinned to `region`.
    pub async fn from_region(region: &str) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl FindingsSource for EcrFindingsSource {
    async fn fetch_findings(&self, repository_name: &str, image_digest: &str) -> Result<ScanSummary, NotifierError> {
        debug!(repository = repository_name, digest = image_digest, "Describing image");

        let resp = self.client
            .describe_images()
            .repository_name(repository_name)
            .image_ids(ImageIdentifier::builder().image_digest(image_digest).build())
            .send()
            .await
            .map_err(|e| fetch_error(&e, repository_name, image_digest))?;

        findings_from_details(resp.image_details(), repository_name, image_digest)
    }

    fn source_name(&self) -> &str { "ecr" }
}

/// Turn an SDK failure into a `Fetch` error carrying the upstream message, and log it.
pub(crate) fn fetch_error<E, R>(err: &SdkError<E, R>, repository_name: &str, image_digest: &str) -> NotifierError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    let message = err
        .as_service_error()
        .and_then(|se| se.message())
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(err).to_string());
    log_fetch_failure(NotifierError::Fetch(message), repository_name, image_digest)
}

/// Pick the first image record of a `DescribeImages` response. Every failure is logged.
pub(crate) fn findings_from_details(
    details: &[ImageDetail],
    repository_name: &str,
    image_digest: &str,
) -> Result<ScanSummary, NotifierError> {
    let detail = details.first().ok_or_else(|| {
        log_fetch_failure(
            NotifierError::Fetch(format!("no image found for {}@{}", repository_name, image_digest)),
            repository_name,
            image_digest,
        )
    })?;

    summary_from_detail(detail, repository_name, image_digest)
        .map_err(|e| log_fetch_failure(e, repository_name, image_digest))
}

fn log_fetch_failure(err: NotifierError, repository_name: &str, image_digest: &str) -> NotifierError {
    match &err {
        NotifierError::Fetch(message) => {
            error!(repository = repository_name, digest = image_digest, "Request failed: {}", message);
        }
        other => {
            error!(repository = repository_name, digest = image_digest, "Request failed: {}", other);
        }
    }
    err
}

/// Convert a registry image record into a `ScanSummary`.
///
/// Identity fields absent from the record fall back to the values the
/// request was made with.
pub fn summary_from_detail(
    detail: &ImageDetail,
    repository_name: &str,
    image_digest: &str,
) -> Result<ScanSummary, NotifierError> {
    let findings = detail.image_scan_findings_summary().ok_or_else(|| {
        NotifierError::Fetch(format!(
            "image {}@{} has no scan findings summary",
            repository_name, image_digest
        ))
    })?;

    let severity_counts = SeverityCounts::from_raw(
        findings
            .finding_severity_counts()
            .into_iter()
            .flatten()
            .map(|(severity, count)| (severity.as_str(), i64::from(*count))),
    );

    Ok(ScanSummary {
        registry_id: detail.registry_id().unwrap_or_default().to_string(),
        repository_name: detail.repository_name().unwrap_or(repository_name).to_string(),
        image_digest: detail.image_digest().unwrap_or(image_digest).to_string(),
        image_tags: detail.image_tags().to_vec(),
        scan_status_description: detail
            .image_scan_status()
            .and_then(|s| s.description())
            .unwrap_or_default()
            .to_string(),
        scan_completed_at: findings.image_scan_completed_at().and_then(to_chrono),
        vulnerability_source_updated_at: findings.vulnerability_source_updated_at().and_then(to_chrono),
        severity_counts,
    })
}

fn to_chrono(at: &SdkDateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(at.secs(), at.subsec_nanos())
}

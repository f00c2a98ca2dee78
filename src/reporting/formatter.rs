use chrono::{DateTime, Utc};

use crate::models::{Attachment, AttachmentField, ColorTag, NotificationMessage, ScanSummary, Severity};

pub const DISPLAY_NAME: &str = "Amazon ECR";
pub const ICON_TOKEN: &str = ":ecr:";
pub const FALLBACK_TEXT: &str = "AmazonECR Image Scan Findings Description.";
pub const UNTAGGED: &str = "untagged";
pub const UNKNOWN_TIME: &str = "unknown";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Color and icon chosen for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityProperties {
    pub color: ColorTag,
    pub icon: &'static str,
}

/// Strict cascade: any critical finding wins, then any high finding, otherwise good.
pub fn severity_properties(summary: &ScanSummary) -> SeverityProperties {
    if summary.count(Severity::Critical) > 0 {
        SeverityProperties { color: ColorTag::Danger, icon: ":red_circle:" }
    } else if summary.count(Severity::High) > 0 {
        SeverityProperties { color: ColorTag::Warning, icon: ":large_orange_diamond:" }
    } else {
        SeverityProperties { color: ColorTag::Good, icon: ":green_heart:" }
    }
}

pub fn console_link(region: &str, registry_id: &str, repository_name: &str, image_digest: &str) -> String {
    format!(
        "https://{region}.console.aws.amazon.com/ecr/repositories/private/{registry_id}/{repository_name}/_/image/{image_digest}/scan-results?region={region}"
    )
}

pub fn format_timestamp(at: Option<&DateTime<Utc>>) -> String {
    match at {
        Some(at) => at.format(TIMESTAMP_FORMAT).to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

pub fn format_message(summary: &ScanSummary, region: &str, channel: &str) -> NotificationMessage {
    let properties = severity_properties(summary);
    let tag = summary.primary_tag().unwrap_or(UNTAGGED);

    let body = format!(
        "{}\nImage Scan Completed at {}\nVulnerability Source Updated at {}",
        summary.scan_status_description,
        format_timestamp(summary.scan_completed_at.as_ref()),
        format_timestamp(summary.vulnerability_source_updated_at.as_ref()),
    );

    let fields = summary
        .severity_counts
        .iter()
        .map(|(severity, count)| AttachmentField {
            label: severity.label().to_string(),
            value: count,
            is_short: true,
        })
        .collect();

    NotificationMessage {
        display_name: DISPLAY_NAME.to_string(),
        target_channel: channel.to_string(),
        icon_token: ICON_TOKEN.to_string(),
        headline: format!("*ECR Image Scan findings | {} | Account:{}*", region, summary.registry_id),
        attachment: Attachment {
            fallback_text: FALLBACK_TEXT.to_string(),
            color_tag: properties.color,
            title: format!("{} {}:{}", properties.icon, summary.repository_name, tag),
            title_link: console_link(region, &summary.registry_id, &summary.repository_name, &summary.image_digest),
            body,
            fields,
        },
    }
}

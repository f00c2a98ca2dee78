use serde::Deserialize;
use serde_json::Value;

use crate::errors::NotifierError;

/// EventBridge envelope for an "ECR Image Scan" event.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanCompletedEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "detail-type", default)]
    pub detail_type: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    pub detail: ScanEventDetail,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScanEventDetail {
    pub repository_name: String,
    pub image_digest: String,
    #[serde(default)]
    pub image_tags: Vec<String>,
}

impl ScanCompletedEvent {
    /// Decode and validate a raw event payload.
    pub fn from_value(value: Value) -> Result<Self, NotifierError> {
        let event: Self = serde_json::from_value(value)
            .map_err(|e| NotifierError::InvalidEvent(e.to_string()))?;
        event.validate()?;
        Ok(event)
    }

    fn validate(&self) -> Result<(), NotifierError> {
        if self.detail.repository_name.trim().is_empty() {
            return Err(NotifierError::InvalidEvent("detail.repository-name is empty".into()));
        }
        if self.detail.image_digest.trim().is_empty() {
            return Err(NotifierError::InvalidEvent("detail.image-digest is empty".into()));
        }
        Ok(())
    }
}

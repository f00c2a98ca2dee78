use serde::{Serialize, Serializer};

/// Attachment color understood by Slack-compatible webhooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Danger,
    Warning,
    Good,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Danger => "danger",
            ColorTag::Warning => "warning",
            ColorTag::Good => "good",
        }
    }
}

/// Chat message posted to the incoming webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationMessage {
    #[serde(rename = "username")]
    pub display_name: String,
    #[serde(rename = "channels")]
    pub target_channel: String,
    #[serde(rename = "icon_emoji")]
    pub icon_token: String,
    #[serde(rename = "text")]
    pub headline: String,
    #[serde(rename = "attachments", serialize_with = "single_attachment")]
    pub attachment: Attachment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    #[serde(rename = "fallback")]
    pub fallback_text: String,
    #[serde(rename = "color")]
    pub color_tag: ColorTag,
    pub title: String,
    pub title_link: String,
    #[serde(rename = "text")]
    pub body: String,
    pub fields: Vec<AttachmentField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentField {
    #[serde(rename = "title")]
    pub label: String,
    pub value: u64,
    #[serde(rename = "short")]
    pub is_short: bool,
}

fn single_attachment<S: Serializer>(attachment: &Attachment, serializer: S) -> Result<S::Ok, S::Error> {
    std::slice::from_ref(attachment).serialize(serializer)
}

impl NotificationMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Registry request failed: {0}")]
    Fetch(String),

    #[error("Webhook request failed: {status} {reason}")]
    WebhookStatus { status: u16, reason: String },

    #[error("Server connection failed: {0}")]
    Connection(String),

    #[error("Lambda runtime error: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

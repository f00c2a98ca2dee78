use super::types::NotifierError;

/// Result code reported to the runtime when an invocation delivered its message.
pub const RESULT_DELIVERED: i32 = 0;
/// Result code reported to the runtime for any fetch or delivery failure.
pub const RESULT_FAILED: i32 = 1;
/// Process exit code for configuration errors detected before any event is handled.
pub const EXIT_CONFIG: i32 = 2;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl NotifierError {
    /// Classify this error for structured logging and process exit codes.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            NotifierError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: EXIT_CONFIG,
            },
            NotifierError::InvalidEvent(_) => ErrorClassification {
                error_type: "InvalidEventError",
                exit_code: RESULT_FAILED,
            },
            NotifierError::Fetch(_) => ErrorClassification {
                error_type: "FetchError",
                exit_code: RESULT_FAILED,
            },
            NotifierError::WebhookStatus { .. } | NotifierError::Connection(_) => ErrorClassification {
                error_type: "DeliveryError",
                exit_code: RESULT_FAILED,
            },
            NotifierError::Runtime(_) => ErrorClassification {
                error_type: "RuntimeError",
                exit_code: RESULT_FAILED,
            },
            NotifierError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: RESULT_FAILED,
            },
            NotifierError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: RESULT_FAILED,
            },
        }
    }

    /// True when the failure happened while posting to the webhook.
    pub fn is_delivery(&self) -> bool {
        matches!(self, NotifierError::WebhookStatus { .. } | NotifierError::Connection(_))
    }
}

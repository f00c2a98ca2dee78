use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::errors::{NotifierError, RESULT_DELIVERED, RESULT_FAILED};
use crate::models::NotificationMessage;

/// Body returned by Slack incoming webhooks on success.
const SLACK_OK_BODY: &str = "ok";

/// Posts notification messages to an incoming webhook.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: Client,
}

impl WebhookNotifier {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Send one message. Any non-2xx status or transport failure is an error.
    pub async fn post(&self, message: &NotificationMessage, webhook_url: &str) -> Result<(), NotifierError> {
        let body = message.to_json()?;

        let resp = self.client
            .post(webhook_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| NotifierError::Connection(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NotifierError::WebhookStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        // The response body is informational only; a 2xx is treated as delivered.
        match resp.text().await {
            Ok(text) if text.trim().is_empty() || text.trim() == SLACK_OK_BODY => {
                debug!(status = status.as_u16(), body = %text.trim(), "Webhook response");
            }
            Ok(text) => {
                warn!(status = status.as_u16(), body = %text.trim(), "Webhook accepted the request with an unexpected body");
            }
            Err(e) => {
                debug!(status = status.as_u16(), error = %e, "Could not read webhook response body");
            }
        }
        Ok(())
    }

    /// Send one message and report the result code: 0 delivered, 1 failed.
    pub async fn notify(&self, message: &NotificationMessage, webhook_url: &str) -> i32 {
        match self.post(message, webhook_url).await {
            Ok(()) => {
                info!("Message posted.");
                RESULT_DELIVERED
            }
            Err(e) => {
                log_delivery_error(&e);
                RESULT_FAILED
            }
        }
    }
}

impl Default for WebhookNotifier {
    fn default() -> Self {
        Self::new()
    }
}

fn log_delivery_error(err: &NotifierError) {
    match err {
        NotifierError::WebhookStatus { status, reason } => {
            error!(status = *status, "Request failed: {} {}", status, reason);
        }
        NotifierError::Connection(reason) => {
            error!("Server connection failed: {}", reason);
        }
        other => {
            error!(error_type = other.classify().error_type, "Request failed: {}", other);
        }
    }
}

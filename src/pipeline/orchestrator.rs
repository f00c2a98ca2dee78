use std::sync::Arc;

use serde_json::Value;
use tracing::{error, field, info, info_span, Instrument};

use crate::config::NotifierConfig;
use crate::errors::{NotifierError, RESULT_FAILED};
use crate::models::{NotificationMessage, ScanCompletedEvent};
use crate::notify::WebhookNotifier;
use crate::registry::{EcrFindingsSource, FindingsSource};
use crate::reporting::format_message;

/// Fetch → format → deliver, once per scan event.
pub struct NotificationPipeline {
    config: NotifierConfig,
    source: Arc<dyn FindingsSource>,
    notifier: WebhookNotifier,
}

impl NotificationPipeline {
    pub fn new(config: NotifierConfig, source: Arc<dyn FindingsSource>, notifier: WebhookNotifier) -> Self {
        Self { config, source, notifier }
    }

    /// Production wiring: ECR client from the ambient credential chain.
    pub async fn from_config(config: NotifierConfig) -> Self {
        let source: Arc<dyn FindingsSource> = Arc::new(EcrFindingsSource::from_region(&config.region).await);
        Self::new(config, source, WebhookNotifier::new())
    }

    /// Fetch findings for the event's image and build the message without sending it.
    pub async fn prepare(&self, event: &ScanCompletedEvent) -> Result<NotificationMessage, NotifierError> {
        let detail = &event.detail;
        let mut summary = self.source
            .fetch_findings(&detail.repository_name, &detail.image_digest)
            .await?;

        if summary.image_tags.is_empty() && !detail.image_tags.is_empty() {
            summary.image_tags = detail.image_tags.clone();
        }

        info!(
            source = self.source.source_name(),
            total = summary.total_findings(),
            "Fetched scan findings"
        );
        Ok(format_message(&summary, &self.config.region, &self.config.channel))
    }

    /// Handle a decoded event and return the result code for the runtime.
    ///
    /// A fetch failure returns before anything is posted.
    pub async fn handle(&self, event: &ScanCompletedEvent) -> i32 {
        let message = match self.prepare(event).await {
            Ok(message) => message,
            Err(e) => {
                // Registry failures are logged where they happen.
                if !matches!(e, NotifierError::Fetch(_)) {
                    error!(error_type = e.classify().error_type, "Invocation failed: {}", e);
                }
                return RESULT_FAILED;
            }
        };
        self.notifier.notify(&message, &self.config.webhook_url).await
    }

    /// Handle a raw event payload inside its own invocation span.
    pub async fn handle_value(&self, payload: Value, request_id: Option<&str>) -> i32 {
        let span = info_span!(
            "invocation",
            request_id = request_id.unwrap_or("-"),
            repository = field::Empty,
            digest = field::Empty,
        );

        async {
            let event = match ScanCompletedEvent::from_value(payload) {
                Ok(event) => event,
                Err(e) => {
                    error!(error_type = e.classify().error_type, "Invocation failed: {}", e);
                    return RESULT_FAILED;
                }
            };
            let span = tracing::Span::current();
            span.record("repository", event.detail.repository_name.as_str());
            span.record("digest", event.detail.image_digest.as_str());
            info!(
                event_id = event.id.as_deref().unwrap_or("-"),
                detail_type = event.detail_type.as_deref().unwrap_or("-"),
                event_region = event.region.as_deref().unwrap_or("-"),
                "Received scan event"
            );
            self.handle(&event).await
        }
        .instrument(span)
        .await
    }
}

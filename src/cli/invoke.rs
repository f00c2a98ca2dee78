use std::io::Write;

use tokio::io::AsyncReadExt;
use tracing::info;

use crate::cli::commands::InvokeArgs;
use crate::config::NotifierConfig;
use crate::errors::{NotifierError, RESULT_DELIVERED, RESULT_FAILED};
use crate::models::ScanCompletedEvent;
use crate::pipeline::NotificationPipeline;

pub async fn handle_invoke(args: InvokeArgs) -> Result<i32, NotifierError> {
    let config = NotifierConfig::from_env()?;
    let pipeline = NotificationPipeline::from_config(config).await;
    run_invoke(&args, &pipeline, &mut std::io::stdout()).await
}

/// Run one event through `pipeline`. Dry runs write the payload to `out`.
pub async fn run_invoke<W: Write>(
    args: &InvokeArgs,
    pipeline: &NotificationPipeline,
    out: &mut W,
) -> Result<i32, NotifierError> {
    let raw = read_event(&args.event).await?;
    let payload: serde_json::Value = serde_json::from_str(&raw)?;

    if !args.dry_run {
        return Ok(pipeline.handle_value(payload, None).await);
    }

    let event = ScanCompletedEvent::from_value(payload)?;
    info!(repository = %event.detail.repository_name, "Dry run, webhook will not be called");
    match pipeline.prepare(&event).await {
        Ok(message) => {
            serde_json::to_writer_pretty(&mut *out, &message)?;
            writeln!(out)?;
            Ok(RESULT_DELIVERED)
        }
        Err(NotifierError::Fetch(_)) => Ok(RESULT_FAILED),
        Err(e) => Err(e),
    }
}

async fn read_event(source: &str) -> Result<String, NotifierError> {
    if source == "-" {
        let mut raw = String::new();
        tokio::io::stdin().read_to_string(&mut raw).await?;
        return Ok(raw);
    }
    tokio::fs::read_to_string(source)
        .await
        .map_err(|e| NotifierError::InvalidEvent(format!("cannot read {}: {}", source, e)))
}

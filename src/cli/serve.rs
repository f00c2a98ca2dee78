use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::config::NotifierConfig;
use crate::errors::NotifierError;
use crate::pipeline::NotificationPipeline;

pub async fn handle_serve() -> Result<(), NotifierError> {
    let config = NotifierConfig::from_env()?;
    info!(region = %config.region, channel = %config.channel, "Starting Lambda runtime");

    let pipeline = Arc::new(NotificationPipeline::from_config(config).await);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let pipeline = pipeline.clone();
        async move {
            let (payload, context) = event.into_parts();
            let code = pipeline.handle_value(payload, Some(context.request_id.as_str())).await;
            Ok::<i32, lambda_runtime::Error>(code)
        }
    }))
    .await
    .map_err(|e| NotifierError::Runtime(e.to_string()))
}

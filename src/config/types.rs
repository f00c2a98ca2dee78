use crate::errors::NotifierError;

pub const ENV_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const ENV_REGION: &str = "AWS_REGION";
pub const ENV_CHANNEL: &str = "CHANNEL";
pub const ENV_WEBHOOK_URL: &str = "WEBHOOK_URL";

/// Settings resolved once at startup and shared by every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Region used for the console deep link and the registry client.
    pub region: String,
    /// Destination channel name sent in the webhook payload.
    pub channel: String,
    /// Incoming webhook endpoint.
    pub webhook_url: String,
}

impl NotifierConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Every missing key is reported in a single error so a misconfigured
    /// function fails once with the full list.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let region = get(ENV_DEFAULT_REGION).or_else(|| get(ENV_REGION));
        let channel = get(ENV_CHANNEL);
        let webhook_url = get(ENV_WEBHOOK_URL);

        let mut missing = Vec::new();
        if region.is_none() {
            missing.push(format!("{} (or {})", ENV_DEFAULT_REGION, ENV_REGION));
        }
        if channel.is_none() {
            missing.push(ENV_CHANNEL.to_string());
        }
        if webhook_url.is_none() {
            missing.push(ENV_WEBHOOK_URL.to_string());
        }

        match (region, channel, webhook_url) {
            (Some(region), Some(channel), Some(webhook_url)) => {
                let config = Self { region, channel, webhook_url };
                config.validate()?;
                Ok(config)
            }
            _ => Err(NotifierError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            ))),
        }
    }

    pub fn validate(&self) -> Result<(), NotifierError> {
        let url = reqwest::Url::parse(&self.webhook_url)
            .map_err(|e| NotifierError::Config(format!("{} is not a valid URL: {}", ENV_WEBHOOK_URL, e)))?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(NotifierError::Config(format!(
                    "{} must use http or https, got {}",
                    ENV_WEBHOOK_URL, other
                )))
            }
        }
        if self.region.contains(char::is_whitespace) {
            return Err(NotifierError::Config(format!("invalid region: {:?}", self.region)));
        }
        Ok(())
    }
}

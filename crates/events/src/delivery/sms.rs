//! Reminder SMS delivery via an HTTP gateway.
//!
//! [`SmsDelivery`] POSTs a JSON payload to a configurable gateway endpoint
//! (e.g. a Twilio-compatible relay). One attempt per message: reminder
//! delivery has no retry policy, a failed send marks the reminder FAILED.

use std::time::Duration;

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for SMS delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("SMS gateway returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// SmsConfig
// ---------------------------------------------------------------------------

/// Configuration for the SMS gateway.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Gateway endpoint URL.
    pub gateway_url: String,
    /// Optional bearer token for the gateway.
    pub api_key: Option<String>,
    /// Sender id shown to the recipient.
    pub from: String,
}

impl SmsConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMS_GATEWAY_URL` is not set, signalling that SMS
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable          | Required | Default     |
    /// |-------------------|----------|-------------|
    /// | `SMS_GATEWAY_URL` | yes      | —           |
    /// | `SMS_API_KEY`     | no       | —           |
    /// | `SMS_FROM`        | no       | `HMS Nova`  |
    pub fn from_env() -> Option<Self> {
        let gateway_url = std::env::var("SMS_GATEWAY_URL").ok()?;
        Some(Self {
            gateway_url,
            api_key: std::env::var("SMS_API_KEY").ok(),
            from: std::env::var("SMS_FROM").unwrap_or_else(|_| "HMS Nova".to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// SmsDelivery
// ---------------------------------------------------------------------------

/// Sends reminder text messages through the HTTP gateway.
pub struct SmsDelivery {
    config: SmsConfig,
    client: reqwest::Client,
}

impl SmsDelivery {
    /// Create a new delivery service with a pre-configured HTTP client.
    pub fn new(config: SmsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { config, client }
    }

    /// Send one text message. A single attempt; errors propagate to the
    /// dispatcher which records them on the reminder row.
    pub async fn send(&self, to_phone: &str, message: &str) -> Result<(), SmsError> {
        let payload = serde_json::json!({
            "to": to_phone,
            "from": self.config.from,
            "message": message,
        });

        let mut request = self.client.post(&self.config.gateway_url).json(&payload);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SmsError::HttpStatus(response.status().as_u16()));
        }

        tracing::info!(to = to_phone, "Reminder SMS sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_gateway_url() {
        std::env::remove_var("SMS_GATEWAY_URL");
        assert!(SmsConfig::from_env().is_none());
    }

    #[test]
    fn sms_error_display_http_status() {
        let err = SmsError::HttpStatus(502);
        assert_eq!(err.to_string(), "SMS gateway returned HTTP 502");
    }
}

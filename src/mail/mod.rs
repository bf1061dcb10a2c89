//! Mail relay client for inquiry notifications.
//!
//! Notifications go out as a JSON POST to an HTTP mail relay (any
//! SendGrid/Mailgun-style endpoint). When the relay is not configured the
//! mailer is a no-op and submissions succeed without a notification.

use std::time::Duration;

use chrono::Local;
use serde_json::json;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::ContactInquiry;

/// Bound on the relay round-trip. Inquiry submissions block on the send,
/// so a hung relay must not hold the request open indefinitely.
const RELAY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
struct RelayConfig {
    url: String,
    api_key: String,
    recipient: String,
}

/// Client for the external mail relay.
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    relay: Option<RelayConfig>,
}

impl Mailer {
    /// Build a mailer from configuration. The relay is enabled only when
    /// the endpoint, credential and recipient are all configured.
    pub fn from_config(config: &Config) -> Self {
        let relay = match (
            &config.mail_relay_url,
            &config.mail_api_key,
            &config.notify_email,
        ) {
            (Some(url), Some(api_key), Some(recipient)) => Some(RelayConfig {
                url: url.clone(),
                api_key: api_key.clone(),
                recipient: recipient.clone(),
            }),
            _ => None,
        };

        let client = reqwest::Client::builder()
            .timeout(RELAY_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self { client, relay }
    }

    /// Whether a relay endpoint is configured.
    pub fn is_enabled(&self) -> bool {
        self.relay.is_some()
    }

    /// Send the notification for a freshly persisted inquiry.
    ///
    /// Skipped silently when the relay is unconfigured. A relay failure
    /// maps to `AppError::MailRelay`, which the HTTP layer reports as a
    /// generic 500 even though the inquiry was already persisted.
    pub async fn send_inquiry_notification(
        &self,
        inquiry: &ContactInquiry,
    ) -> Result<(), AppError> {
        let Some(relay) = &self.relay else {
            tracing::debug!("Mail relay not configured, skipping notification");
            return Ok(());
        };

        let submitted_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let body = format!(
            "New inquiry received:\n\n\
             Name: {}\n\
             Email: {}\n\
             WhatsApp: {}\n\
             Budget: {}\n\
             Interested car: {}\n\n\
             Submitted at: {}",
            inquiry.name,
            inquiry.email,
            inquiry.whatsapp,
            inquiry.budget,
            inquiry.interested_car,
            submitted_at,
        );

        let payload = json!({
            "to": relay.recipient,
            "subject": format!("New car inquiry from {}", inquiry.name),
            "text": body,
        });

        let response = self
            .client
            .post(&relay.url)
            .bearer_auth(&relay.api_key)
            .json(&payload)
            .send()
            .await?;

        if let Err(err) = response.error_for_status_ref() {
            tracing::error!("Mail relay rejected notification: {}", err);
            return Err(AppError::MailRelay(format!(
                "Mail relay rejected notification: {}",
                err
            )));
        }

        tracing::info!("Inquiry notification sent for {}", inquiry.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            db_path: "./data/test.sqlite".into(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            admin_email: None,
            admin_password: None,
            mail_relay_url: None,
            mail_api_key: None,
            notify_email: None,
        }
    }

    #[test]
    fn test_mailer_disabled_without_relay_config() {
        let mailer = Mailer::from_config(&base_config());
        assert!(!mailer.is_enabled());
    }

    #[test]
    fn test_mailer_requires_all_three_settings() {
        let mut config = base_config();
        config.mail_relay_url = Some("http://relay.test/send".to_string());
        config.mail_api_key = Some("relay-key".to_string());
        let mailer = Mailer::from_config(&config);
        assert!(!mailer.is_enabled());

        config.notify_email = Some("sales@dealership.test".to_string());
        let mailer = Mailer::from_config(&config);
        assert!(mailer.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_mailer_send_is_noop() {
        let mailer = Mailer::from_config(&base_config());
        let inquiry = ContactInquiry {
            id: "x".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            whatsapp: "+91 98765 43210".to_string(),
            budget: "30-35 lakh".to_string(),
            interested_car: "Fortuner".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        };
        assert!(mailer.send_inquiry_notification(&inquiry).await.is_ok());
    }
}

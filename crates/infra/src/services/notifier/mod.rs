use crate::config::Config;
use itu_calendar_domain::Channel;
use reqwest::Client;
use serde::Serialize;
use std::sync::Mutex;
use std::time::Duration;
use tracing::error;

/// Outbound delivery to the external channel providers. All three
/// channels are plain HTTP calls; one trait seam so the reminder
/// batch and the test-send path can be exercised without a network.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn send_discord(
        &self,
        webhook_url: &str,
        message: &DiscordMessage,
    ) -> anyhow::Result<()>;
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
    async fn send_sms(&self, phone_number: &str, body: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscordMessage {
    pub embeds: Vec<DiscordEmbed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscordEmbed {
    pub title: String,
    pub description: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<DiscordEmbedFooter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscordEmbedFooter {
    pub text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailRequest<'a> {
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SmsRequest<'a> {
    to: &'a str,
    body: &'a str,
}

/// Real provider client. Every request carries the configured
/// timeout so a hung provider cannot stall the batch.
pub struct HttpNotifier {
    client: Client,
    email_api_url: Option<String>,
    email_api_key: Option<String>,
    sms_api_url: Option<String>,
    sms_api_key: Option<String>,
}

impl HttpNotifier {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.provider_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            email_api_url: config.email_api_url.clone(),
            email_api_key: config.email_api_key.clone(),
            sms_api_url: config.sms_api_url.clone(),
            sms_api_key: config.sms_api_key.clone(),
        }
    }
}

#[async_trait::async_trait]
impl INotifier for HttpNotifier {
    async fn send_discord(
        &self,
        webhook_url: &str,
        message: &DiscordMessage,
    ) -> anyhow::Result<()> {
        let res = self
            .client
            .post(webhook_url)
            .json(message)
            .send()
            .await
            .map_err(|e| {
                error!("Discord webhook request failed: {:?}", e);
                anyhow::Error::msg(format!("Discord request failed: {}", e))
            })?;
        if !res.status().is_success() {
            return Err(anyhow::Error::msg(format!(
                "Discord returned {}",
                res.status()
            )));
        }
        Ok(())
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        let url = self
            .email_api_url
            .as_ref()
            .ok_or_else(|| anyhow::Error::msg("Email provider is not configured"))?;
        let mut req = self
            .client
            .post(url)
            .json(&EmailRequest { to, subject, body });
        if let Some(key) = &self.email_api_key {
            req = req.bearer_auth(key);
        }
        let res = req.send().await.map_err(|e| {
            error!("Email provider request failed: {:?}", e);
            anyhow::Error::msg(format!("Email request failed: {}", e))
        })?;
        if !res.status().is_success() {
            return Err(anyhow::Error::msg(format!(
                "Email provider returned {}",
                res.status()
            )));
        }
        Ok(())
    }

    async fn send_sms(&self, phone_number: &str, body: &str) -> anyhow::Result<()> {
        let url = self
            .sms_api_url
            .as_ref()
            .ok_or_else(|| anyhow::Error::msg("SMS provider is not configured"))?;
        let mut req = self
            .client
            .post(url)
            .json(&SmsRequest {
                to: phone_number,
                body,
            });
        if let Some(key) = &self.sms_api_key {
            req = req.bearer_auth(key);
        }
        let res = req.send().await.map_err(|e| {
            error!("SMS provider request failed: {:?}", e);
            anyhow::Error::msg(format!("SMS request failed: {}", e))
        })?;
        if !res.status().is_success() {
            return Err(anyhow::Error::msg(format!(
                "SMS provider returned {}",
                res.status()
            )));
        }
        Ok(())
    }
}

/// A delivery recorded by `InMemoryNotifier`
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub channel: Channel,
    pub address: String,
    pub body: String,
}

/// Recording notifier used when testing the fan-out and test-send
/// paths. Channels listed in `failing` reject every delivery.
pub struct InMemoryNotifier {
    pub sent: Mutex<Vec<SentMessage>>,
    pub failing: Mutex<Vec<Channel>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_channel(&self, channel: Channel) {
        self.failing.lock().unwrap().push(channel);
    }

    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    fn deliver(&self, channel: Channel, address: &str, body: &str) -> anyhow::Result<()> {
        if self.failing.lock().unwrap().contains(&channel) {
            return Err(anyhow::Error::msg(format!("{} provider returned 500", channel)));
        }
        self.sent.lock().unwrap().push(SentMessage {
            channel,
            address: address.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn send_discord(
        &self,
        webhook_url: &str,
        message: &DiscordMessage,
    ) -> anyhow::Result<()> {
        let body = message
            .embeds
            .iter()
            .map(|e| format!("{}\n{}", e.title, e.description))
            .collect::<Vec<_>>()
            .join("\n");
        self.deliver(Channel::Discord, webhook_url, &body)
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        self.deliver(Channel::Email, to, &format!("{}\n{}", subject, body))
    }

    async fn send_sms(&self, phone_number: &str, body: &str) -> anyhow::Result<()> {
        self.deliver(Channel::Sms, phone_number, body)
    }
}

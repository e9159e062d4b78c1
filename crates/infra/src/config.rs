use itu_calendar_utils::create_random_secret;
use tracing::{info, log::warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Bearer secret the scheduled notification trigger must present
    pub cron_secret: String,
    /// Upper bound in seconds for every outbound channel-provider
    /// call, so one hung provider cannot stall the reminder batch
    pub provider_timeout_secs: u64,
    /// HTTP endpoint of the transactional email provider
    pub email_api_url: Option<String>,
    pub email_api_key: Option<String>,
    /// HTTP endpoint of the SMS provider
    pub sms_api_url: Option<String>,
    pub sms_api_key: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let cron_secret = match std::env::var("CRON_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find CRON_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(16);
                info!(
                    "Secret for triggering the notification batch was generated and set to: {}",
                    secret
                );
                secret
            }
        };

        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let default_timeout = "10";
        let provider_timeout_secs = std::env::var("PROVIDER_TIMEOUT_SECS")
            .unwrap_or(default_timeout.into())
            .parse::<u64>()
            .unwrap_or_else(|_| {
                warn!(
                    "The given PROVIDER_TIMEOUT_SECS is not valid, falling back to {} seconds.",
                    default_timeout
                );
                default_timeout.parse::<u64>().unwrap()
            });

        Self {
            cron_secret,
            port,
            provider_timeout_secs,
            email_api_url: std::env::var("EMAIL_API_URL").ok(),
            email_api_key: std::env::var("EMAIL_API_KEY").ok(),
            sms_api_url: std::env::var("SMS_API_URL").ok(),
            sms_api_key: std::env::var("SMS_API_KEY").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

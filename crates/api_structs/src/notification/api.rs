use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::dtos::NotificationSettingsDTO;
use itu_calendar_domain::{Channel, EventType, NotificationSettings};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsResponse {
    pub settings: NotificationSettingsDTO,
}

impl NotificationSettingsResponse {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            settings: NotificationSettingsDTO::new(settings),
        }
    }
}

pub mod get_notification_settings {
    use super::*;

    pub type APIResponse = NotificationSettingsResponse;
}

pub mod update_notification_settings {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub discord_enabled: Option<bool>,
        pub email_enabled: Option<bool>,
        pub sms_enabled: Option<bool>,
        pub discord_webhook_url: Option<Option<String>>,
        pub phone_number: Option<Option<String>>,
        pub notify_event_types: Option<Vec<EventType>>,
        pub notify_day_before: Option<bool>,
        pub notify_same_day: Option<bool>,
        pub notify_time: Option<Option<NaiveTime>>,
    }

    pub type APIResponse = NotificationSettingsResponse;
}

pub mod send_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub sent: usize,
        pub errors: Vec<String>,
    }
}

pub mod send_test_notification {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub channel: Channel,
        /// SMS test destination, supplied explicitly so a number can
        /// be tried before it is saved to settings
        pub phone_number: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub ok: bool,
    }

    /// Provider failure, with the provider's own status or message
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ErrorResponse {
        pub error: String,
    }
}

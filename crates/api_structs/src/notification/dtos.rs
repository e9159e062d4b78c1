use chrono::NaiveTime;
use itu_calendar_domain::{EventType, NotificationSettings, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsDTO {
    pub user_id: ID,
    pub discord_enabled: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub discord_webhook_url: Option<String>,
    pub phone_number: Option<String>,
    pub notify_event_types: Vec<EventType>,
    pub notify_day_before: bool,
    pub notify_same_day: bool,
    pub notify_time: Option<NaiveTime>,
}

impl NotificationSettingsDTO {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            user_id: settings.user_id,
            discord_enabled: settings.discord_enabled,
            email_enabled: settings.email_enabled,
            sms_enabled: settings.sms_enabled,
            discord_webhook_url: settings.discord_webhook_url,
            phone_number: settings.phone_number,
            notify_event_types: settings.notify_event_types,
            notify_day_before: settings.notify_day_before,
            notify_same_day: settings.notify_same_day,
            notify_time: settings.notify_time,
        }
    }
}

use super::INotificationSettingsRepo;
use itu_calendar_domain::{NotificationSettings, ID};
use std::sync::Mutex;

pub struct InMemoryNotificationSettingsRepo {
    settings: Mutex<Vec<NotificationSettings>>,
}

impl InMemoryNotificationSettingsRepo {
    pub fn new() -> Self {
        Self {
            settings: Mutex::new(Vec::new()),
        }
    }
}

// Keyed by user_id rather than a row id, so the generic inmemory
// helpers built on `Entity` do not apply here.
#[async_trait::async_trait]
impl INotificationSettingsRepo for InMemoryNotificationSettingsRepo {
    async fn upsert(&self, settings: &NotificationSettings) -> anyhow::Result<()> {
        let mut rows = self.settings.lock().unwrap();
        rows.retain(|s| s.user_id != settings.user_id);
        rows.push(settings.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> Option<NotificationSettings> {
        let rows = self.settings.lock().unwrap();
        rows.iter().find(|s| s.user_id == *user_id).cloned()
    }

    async fn find_enabled(&self) -> Vec<NotificationSettings> {
        let rows = self.settings.lock().unwrap();
        rows.iter()
            .filter(|s| s.discord_enabled || s.email_enabled || s.sms_enabled)
            .cloned()
            .collect()
    }
}

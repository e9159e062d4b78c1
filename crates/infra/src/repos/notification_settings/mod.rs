mod inmemory;

pub use inmemory::InMemoryNotificationSettingsRepo;
use itu_calendar_domain::{NotificationSettings, ID};

#[async_trait::async_trait]
pub trait INotificationSettingsRepo: Send + Sync {
    /// One row per user; a second upsert replaces the first
    async fn upsert(&self, settings: &NotificationSettings) -> anyhow::Result<()>;
    async fn find_by_user(&self, user_id: &ID) -> Option<NotificationSettings>;
    /// Every row with at least one delivery channel enabled, the
    /// candidate set for the reminder batch
    async fn find_enabled(&self) -> Vec<NotificationSettings>;
}

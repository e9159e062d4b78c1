mod course;
mod event;
mod notification_settings;
mod share;
mod shared;
mod subscription;
mod user;

use course::{ICourseRepo, InMemoryCourseRepo};
use event::{IEventRepo, InMemoryEventRepo};
use notification_settings::{INotificationSettingsRepo, InMemoryNotificationSettingsRepo};
pub use share::{IShareRepo, ShareInsertError};
use share::InMemoryShareRepo;
use std::sync::Arc;
pub use subscription::{ISubscriptionRepo, SubscriptionInsertError};
use subscription::InMemorySubscriptionRepo;
use user::{IUserRepo, InMemoryUserRepo};

pub use shared::repo::DeleteResult;

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub courses: Arc<dyn ICourseRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub shares: Arc<dyn IShareRepo>,
    pub subscriptions: Arc<dyn ISubscriptionRepo>,
    pub notification_settings: Arc<dyn INotificationSettingsRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            courses: Arc::new(InMemoryCourseRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
            shares: Arc::new(InMemoryShareRepo::new()),
            subscriptions: Arc::new(InMemorySubscriptionRepo::new()),
            notification_settings: Arc::new(InMemoryNotificationSettingsRepo::new()),
        }
    }
}

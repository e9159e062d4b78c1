mod inmemory;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemorySubscriptionRepo;
use itu_calendar_domain::{Subscription, ID};
use thiserror::Error;

/// Store-level unique constraint on (subscriber_id, source_course_id)
#[derive(Error, Debug, PartialEq)]
pub enum SubscriptionInsertError {
    #[error("Already subscribed to this course")]
    AlreadySubscribed,
    #[error("Storage error")]
    Storage,
}

#[async_trait::async_trait]
pub trait ISubscriptionRepo: Send + Sync {
    async fn insert(&self, subscription: &Subscription) -> Result<(), SubscriptionInsertError>;
    async fn save(&self, subscription: &Subscription) -> anyhow::Result<()>;
    async fn find(&self, subscription_id: &ID) -> Option<Subscription>;
    async fn find_by_subscriber(&self, subscriber_id: &ID) -> Vec<Subscription>;
    async fn delete(&self, subscription_id: &ID) -> Option<Subscription>;
    async fn delete_by_source_course(&self, course_id: &ID) -> anyhow::Result<DeleteResult>;
}

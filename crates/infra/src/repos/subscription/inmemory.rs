use super::{ISubscriptionRepo, SubscriptionInsertError};
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use itu_calendar_domain::{Subscription, ID};
use std::sync::Mutex;

pub struct InMemorySubscriptionRepo {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl InMemorySubscriptionRepo {
    pub fn new() -> Self {
        Self {
            subscriptions: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISubscriptionRepo for InMemorySubscriptionRepo {
    async fn insert(&self, subscription: &Subscription) -> Result<(), SubscriptionInsertError> {
        {
            let subscriptions = self.subscriptions.lock().unwrap();
            let duplicate = subscriptions.iter().any(|s| {
                s.subscriber_id == subscription.subscriber_id
                    && s.source_course_id == subscription.source_course_id
            });
            if duplicate {
                return Err(SubscriptionInsertError::AlreadySubscribed);
            }
        }
        insert(subscription, &self.subscriptions);
        Ok(())
    }

    async fn save(&self, subscription: &Subscription) -> anyhow::Result<()> {
        save(subscription, &self.subscriptions);
        Ok(())
    }

    async fn find(&self, subscription_id: &ID) -> Option<Subscription> {
        find(subscription_id, &self.subscriptions)
    }

    async fn find_by_subscriber(&self, subscriber_id: &ID) -> Vec<Subscription> {
        find_by(&self.subscriptions, |s: &Subscription| {
            s.subscriber_id == *subscriber_id
        })
    }

    async fn delete(&self, subscription_id: &ID) -> Option<Subscription> {
        delete(subscription_id, &self.subscriptions)
    }

    async fn delete_by_source_course(&self, course_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.subscriptions, |s: &Subscription| {
            s.source_course_id == *course_id
        }))
    }
}

use itu_calendar_domain::{Subscription, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDTO {
    pub id: ID,
    pub shared_calendar_id: ID,
    pub source_course_id: ID,
    pub source_user_id: ID,
    pub active: bool,
    pub sort_order: i64,
}

impl SubscriptionDTO {
    pub fn new(subscription: Subscription) -> Self {
        Self {
            id: subscription.id,
            shared_calendar_id: subscription.shared_calendar_id,
            source_course_id: subscription.source_course_id,
            source_user_id: subscription.source_user_id,
            active: subscription.active,
            sort_order: subscription.sort_order,
        }
    }
}

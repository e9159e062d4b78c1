use serde::{Deserialize, Serialize};

use crate::dtos::SubscriptionDTO;
use itu_calendar_domain::{Subscription, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub subscription: SubscriptionDTO,
}

impl SubscriptionResponse {
    pub fn new(subscription: Subscription) -> Self {
        Self {
            subscription: SubscriptionDTO::new(subscription),
        }
    }
}

pub mod subscribe_live {
    use super::*;

    /// Accepts a bare token or a full share URL
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub token: String,
    }

    pub type APIResponse = SubscriptionResponse;
}

pub mod subscribe_copy {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub token: String,
    }

    pub use crate::course::api::CourseResponse as APIResponse;
}

pub mod update_subscription {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub subscription_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub active: Option<bool>,
        pub sort_order: Option<i64>,
    }

    pub type APIResponse = SubscriptionResponse;
}

pub mod unsubscribe {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub subscription_id: ID,
    }

    pub type APIResponse = SubscriptionResponse;
}

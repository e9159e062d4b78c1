use serde::{Deserialize, Serialize};

use crate::dtos::ShareDTO;
use itu_calendar_domain::{SharedCalendar, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub share: ShareDTO,
}

impl ShareResponse {
    pub fn new(share: SharedCalendar) -> Self {
        Self {
            share: ShareDTO::new(share),
        }
    }
}

pub mod create_share {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub course_id: ID,
    }

    pub type APIResponse = ShareResponse;
}

pub mod get_share_for_course {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub course_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub share: Option<ShareDTO>,
    }

    impl APIResponse {
        pub fn new(share: Option<SharedCalendar>) -> Self {
            Self {
                share: share.map(ShareDTO::new),
            }
        }
    }
}

pub mod toggle_share {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub share_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub is_active: bool,
    }

    pub type APIResponse = ShareResponse;
}

pub mod enable_combined_share {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Mints a fresh token even when one already exists
        #[serde(default)]
        pub regenerate: bool,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub combined_share_token: String,
    }
}

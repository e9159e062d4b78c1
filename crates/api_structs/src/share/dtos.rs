use itu_calendar_domain::{SharedCalendar, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShareDTO {
    pub id: ID,
    pub course_id: ID,
    pub share_token: String,
    pub is_active: bool,
}

impl ShareDTO {
    pub fn new(share: SharedCalendar) -> Self {
        Self {
            id: share.id,
            course_id: share.course_id,
            share_token: share.share_token,
            is_active: share.is_active,
        }
    }
}

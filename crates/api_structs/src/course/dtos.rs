use itu_calendar_domain::{Course, CourseEntry, ID};
use serde::{Deserialize, Serialize};

/// One entry in the unified course list. Owned and subscribed
/// courses share this shape; `is_subscribed` tells the UI which
/// mutations are legal.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CourseDTO {
    pub id: ID,
    pub owner_user_id: ID,
    pub name: String,
    pub color: String,
    pub active: bool,
    pub sort_order: i64,
    pub is_subscribed: bool,
    pub subscription_id: Option<ID>,
}

impl CourseDTO {
    pub fn new(entry: CourseEntry) -> Self {
        let is_subscribed = entry.is_subscribed();
        let active = entry.active();
        let sort_order = entry.sort_order();
        let (course, subscription_id) = match entry {
            CourseEntry::Owned(course) => (course, None),
            CourseEntry::Subscribed {
                course,
                subscription,
            } => (course, Some(subscription.id)),
        };
        Self {
            id: course.id,
            owner_user_id: course.user_id,
            name: course.name,
            color: course.color,
            active,
            sort_order,
            is_subscribed,
            subscription_id,
        }
    }

    pub fn from_owned(course: Course) -> Self {
        Self::new(CourseEntry::Owned(course))
    }
}

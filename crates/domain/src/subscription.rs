use crate::course::Course;
use crate::shared::entity::{Entity, ID};

/// A live link from a subscriber to another user's shared course.
/// The subscriber never copies event rows; all reads go through the
/// source owner's data. Unique per (subscriber_id, source_course_id).
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: ID,
    pub subscriber_id: ID,
    pub shared_calendar_id: ID,
    pub source_course_id: ID,
    pub source_user_id: ID,
    pub active: bool,
    pub sort_order: i64,
}

impl Subscription {
    pub fn new(subscriber_id: &ID, shared_calendar_id: &ID, source: &Course) -> Self {
        Self {
            id: Default::default(),
            subscriber_id: subscriber_id.clone(),
            shared_calendar_id: shared_calendar_id.clone(),
            source_course_id: source.id.clone(),
            source_user_id: source.user_id.clone(),
            active: true,
            sort_order: 0,
        }
    }
}

impl Entity for Subscription {
    fn id(&self) -> &ID {
        &self.id
    }
}

use crate::shared::entity::{Entity, ID};
use crate::subscription::Subscription;

/// A course owned by exactly one user. Events, shares and
/// subscriptions referencing a course are cascade-deleted with it.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub color: String,
    pub active: bool,
    pub sort_order: i64,
}

impl Course {
    pub fn new(user_id: &ID, name: &str, color: &str) -> Self {
        Self {
            id: Default::default(),
            user_id: user_id.clone(),
            name: name.to_string(),
            color: color.to_string(),
            active: true,
            sort_order: 0,
        }
    }
}

impl Entity for Course {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// One entry in a user's unified course list. A course is either
/// owned outright or a read-only view composed from a `Subscription`
/// and the source owner's `Course`. The merge that builds this
/// variant is the only place the two presentations meet; mutation
/// paths match on it instead of probing optional fields.
#[derive(Debug, Clone)]
pub enum CourseEntry {
    Owned(Course),
    Subscribed {
        course: Course,
        subscription: Subscription,
    },
}

impl CourseEntry {
    pub fn course(&self) -> &Course {
        match self {
            Self::Owned(course) => course,
            Self::Subscribed { course, .. } => course,
        }
    }

    pub fn id(&self) -> &ID {
        &self.course().id
    }

    pub fn name(&self) -> &str {
        &self.course().name
    }

    pub fn color(&self) -> &str {
        &self.course().color
    }

    pub fn is_subscribed(&self) -> bool {
        matches!(self, Self::Subscribed { .. })
    }

    /// Visibility toggle: the subscriber's own flag for subscribed
    /// entries, the course's flag for owned ones.
    pub fn active(&self) -> bool {
        match self {
            Self::Owned(course) => course.active,
            Self::Subscribed { subscription, .. } => subscription.active,
        }
    }

    pub fn sort_order(&self) -> i64 {
        match self {
            Self::Owned(course) => course.sort_order,
            Self::Subscribed { subscription, .. } => subscription.sort_order,
        }
    }
}

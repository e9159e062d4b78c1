mod inmemory;

pub use inmemory::InMemoryShareRepo;
use itu_calendar_domain::{SharedCalendar, ID};
use thiserror::Error;

/// The share row is the one place needing store-level uniqueness: at
/// most one share per course, and a globally unique token namespace.
#[derive(Error, Debug, PartialEq)]
pub enum ShareInsertError {
    #[error("A share already exists for this course")]
    CourseAlreadyShared,
    #[error("The generated share token is already taken")]
    TokenTaken,
    #[error("Storage error")]
    Storage,
}

#[async_trait::async_trait]
pub trait IShareRepo: Send + Sync {
    async fn insert(&self, share: &SharedCalendar) -> Result<(), ShareInsertError>;
    async fn save(&self, share: &SharedCalendar) -> anyhow::Result<()>;
    async fn find(&self, share_id: &ID) -> Option<SharedCalendar>;
    async fn find_by_course(&self, course_id: &ID) -> Option<SharedCalendar>;
    /// Raw token lookup; callers are responsible for collapsing
    /// "unknown" and "inactive" into one failure signal.
    async fn find_by_token(&self, token: &str) -> Option<SharedCalendar>;
    async fn delete_by_course(&self, course_id: &ID) -> Option<SharedCalendar>;
}

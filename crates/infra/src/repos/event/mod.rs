mod inmemory;

use crate::repos::shared::repo::DeleteResult;
use chrono::NaiveDate;
pub use inmemory::InMemoryEventRepo;
use itu_calendar_domain::{CalendarEvent, ID};

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()>;
    async fn save(&self, event: &CalendarEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<CalendarEvent>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<CalendarEvent>;
    async fn find_by_course(&self, course_id: &ID) -> Vec<CalendarEvent>;
    async fn find_by_courses(&self, course_ids: &[ID]) -> Vec<CalendarEvent>;
    async fn find_by_courses_on_dates(
        &self,
        course_ids: &[ID],
        dates: &[NaiveDate],
    ) -> Vec<CalendarEvent>;
    /// Course-less holiday events owned directly by the user
    async fn find_holidays_by_user(&self, user_id: &ID) -> Vec<CalendarEvent>;
    async fn delete(&self, event_id: &ID) -> Option<CalendarEvent>;
    async fn delete_by_course(&self, course_id: &ID) -> anyhow::Result<DeleteResult>;
}

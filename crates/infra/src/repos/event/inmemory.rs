use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use chrono::NaiveDate;
use itu_calendar_domain::{CalendarEvent, EventType, ID};
use std::sync::Mutex;

pub struct InMemoryEventRepo {
    events: Mutex<Vec<CalendarEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        insert(event, &self.events);
        Ok(())
    }

    async fn save(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        save(event, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<CalendarEvent> {
        find(event_id, &self.events)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<CalendarEvent> {
        find_by(&self.events, |e: &CalendarEvent| e.user_id == *user_id)
    }

    async fn find_by_course(&self, course_id: &ID) -> Vec<CalendarEvent> {
        find_by(&self.events, |e: &CalendarEvent| {
            e.course_id.as_ref() == Some(course_id)
        })
    }

    async fn find_by_courses(&self, course_ids: &[ID]) -> Vec<CalendarEvent> {
        find_by(&self.events, |e: &CalendarEvent| match &e.course_id {
            Some(course_id) => course_ids.contains(course_id),
            None => false,
        })
    }

    async fn find_by_courses_on_dates(
        &self,
        course_ids: &[ID],
        dates: &[NaiveDate],
    ) -> Vec<CalendarEvent> {
        find_by(&self.events, |e: &CalendarEvent| {
            dates.contains(&e.date)
                && match &e.course_id {
                    Some(course_id) => course_ids.contains(course_id),
                    None => false,
                }
        })
    }

    async fn find_holidays_by_user(&self, user_id: &ID) -> Vec<CalendarEvent> {
        find_by(&self.events, |e: &CalendarEvent| {
            e.user_id == *user_id
                && e.course_id.is_none()
                && e.event_type == EventType::Holiday
        })
    }

    async fn delete(&self, event_id: &ID) -> Option<CalendarEvent> {
        delete(event_id, &self.events)
    }

    async fn delete_by_course(&self, course_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.events, |e: &CalendarEvent| {
            e.course_id.as_ref() == Some(course_id)
        }))
    }
}

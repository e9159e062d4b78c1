use chrono::{NaiveDate, NaiveTime};
use itu_calendar_domain::{CalendarEvent, EventType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub course_id: Option<ID>,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub notes: Option<String>,
    pub location: Option<String>,
}

impl EventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            course_id: event.course_id,
            title: event.title,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            event_type: event.event_type,
            notes: event.notes,
            location: event.location,
        }
    }
}

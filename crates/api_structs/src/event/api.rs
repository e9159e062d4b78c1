use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::dtos::EventDTO;
use itu_calendar_domain::{CalendarEvent, EventType, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event: EventDTO,
}

impl EventResponse {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            event: EventDTO::new(event),
        }
    }
}

pub mod create_event {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
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

    pub type APIResponse = EventResponse;
}

pub mod update_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: Option<String>,
        pub date: Option<NaiveDate>,
        pub start_time: Option<Option<NaiveTime>>,
        pub end_time: Option<Option<NaiveTime>>,
        #[serde(rename = "type")]
        pub event_type: Option<EventType>,
        pub notes: Option<Option<String>>,
        pub location: Option<Option<String>>,
    }

    pub type APIResponse = EventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_events {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<EventDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<CalendarEvent>) -> Self {
            Self {
                events: events.into_iter().map(EventDTO::new).collect(),
            }
        }
    }
}

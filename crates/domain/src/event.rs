use crate::shared::entity::{Entity, ID};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A single dated occurrence on a user's calendar. Events belong to
/// a `Course` through `course_id`, except holidays which are
/// calendar-wide and carry no course.
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub id: ID,
    pub user_id: ID,
    pub course_id: Option<ID>,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub event_type: EventType,
    pub notes: Option<String>,
    pub location: Option<String>,
}

impl CalendarEvent {
    pub fn new(user_id: &ID, course_id: Option<ID>, title: &str, date: NaiveDate) -> Self {
        Self {
            id: Default::default(),
            user_id: user_id.clone(),
            course_id,
            title: title.to_string(),
            date,
            start_time: None,
            end_time: None,
            event_type: EventType::Lecture,
            notes: None,
            location: None,
        }
    }
}

impl Entity for CalendarEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Lecture,
    Deliverable,
    Exam,
    Presentation,
    Holiday,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lecture => "lecture",
            Self::Deliverable => "deliverable",
            Self::Exam => "exam",
            Self::Presentation => "presentation",
            Self::Holiday => "holiday",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("Event type: {0} is not recognized")]
pub struct InvalidEventTypeError(String);

impl FromStr for EventType {
    type Err = InvalidEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lecture" => Ok(Self::Lecture),
            "deliverable" => Ok(Self::Deliverable),
            "exam" => Ok(Self::Exam),
            "presentation" => Ok(Self::Presentation),
            "holiday" => Ok(Self::Holiday),
            _ => Err(InvalidEventTypeError(s.to_string())),
        }
    }
}

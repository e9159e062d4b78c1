use crate::event::{CalendarEvent, EventType};
use chrono::NaiveDate;
use itertools::Itertools;

/// The events relevant for one user's reminder run, bucketed into
/// the two day windows the batch knows about. An empty digest must
/// never be delivered.
#[derive(Debug, Clone)]
pub struct ReminderDigest {
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
    pub today_events: Vec<CalendarEvent>,
    pub tomorrow_events: Vec<CalendarEvent>,
}

impl ReminderDigest {
    pub fn build(events: Vec<CalendarEvent>, today: NaiveDate, tomorrow: NaiveDate) -> Self {
        let (today_events, rest): (Vec<_>, Vec<_>) =
            events.into_iter().partition(|e| e.date == today);
        let tomorrow_events = rest
            .into_iter()
            .filter(|e| e.date == tomorrow)
            .collect_vec();
        Self {
            today,
            tomorrow,
            today_events,
            tomorrow_events,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.today_events.is_empty() && self.tomorrow_events.is_empty()
    }
}

/// One reminder line: time range when present, title, owning course
/// name when any, and a type tag for every non-lecture type.
pub fn format_event_line(event: &CalendarEvent, course_name: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(4);
    match (event.start_time, event.end_time) {
        (Some(start), Some(end)) => parts.push(format!(
            "{}–{}",
            start.format("%H:%M"),
            end.format("%H:%M")
        )),
        (Some(start), None) => parts.push(start.format("%H:%M").to_string()),
        _ => {}
    }
    parts.push(event.title.clone());
    if let Some(name) = course_name {
        parts.push(format!("({})", name));
    }
    if event.event_type != EventType::Lecture {
        parts.push(format!("[{}]", event.event_type));
    }
    parts.join(" ")
}

use crate::course::Course;
use crate::event::CalendarEvent;
use crate::shared::entity::ID;
use std::collections::HashMap;

const PRODID: &str = "-//ITU Calendar//EN";
const UID_DOMAIN: &str = "itu-cal";

/// Resolves a `course_id` to the name/color pair the feed needs.
#[derive(Debug, Default)]
pub struct CourseLookup {
    courses: HashMap<ID, (String, String)>,
}

impl CourseLookup {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_courses<'a, I: IntoIterator<Item = &'a Course>>(courses: I) -> Self {
        let mut lookup = Self::new();
        for course in courses {
            lookup.insert(course);
        }
        lookup
    }

    pub fn insert(&mut self, course: &Course) {
        self.courses.insert(
            course.id.clone(),
            (course.name.clone(), course.color.clone()),
        );
    }

    pub fn name(&self, course_id: &ID) -> Option<&str> {
        self.courses.get(course_id).map(|(name, _)| name.as_str())
    }

    pub fn color(&self, course_id: &ID) -> Option<&str> {
        self.courses.get(course_id).map(|(_, color)| color.as_str())
    }
}

/// The feed's ordering contract: date ascending, untimed events
/// before timed ones on the same date, then start time ascending.
pub fn sort_events_for_feed(events: &mut Vec<CalendarEvent>) {
    events.sort_by_key(|e| (e.date, e.start_time.is_some(), e.start_time));
}

/// Deterministic, side-effect-free iCal rendering of a resolved
/// event set. Callers pre-sort (see `sort_events_for_feed`); one
/// VEVENT per input event in input order. Re-running on an unchanged
/// set reproduces the output byte for byte, which calendar clients
/// rely on for caching.
pub fn generate_feed(
    calendar_name: &str,
    events: &[CalendarEvent],
    courses: &CourseLookup,
) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        format!("X-WR-CALNAME:{}", escape_text(calendar_name)),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    for event in events {
        let date_compact = event.date.format("%Y%m%d").to_string();

        lines.push("BEGIN:VEVENT".to_string());
        match event.start_time {
            Some(start) => lines.push(format!(
                "DTSTART:{}T{}",
                date_compact,
                start.format("%H%M%S")
            )),
            None => lines.push(format!("DTSTART;VALUE=DATE:{}", date_compact)),
        }
        if let Some(end) = event.end_time {
            lines.push(format!("DTEND:{}T{}", date_compact, end.format("%H%M%S")));
        }

        let summary = match event.course_id.as_ref().and_then(|id| courses.name(id)) {
            Some(course_name) => format!("{}: {}", course_name, event.title),
            None => event.title.clone(),
        };
        lines.push(format!("SUMMARY:{}", escape_text(&summary)));
        lines.push(format!("UID:{}@{}", event.id, UID_DOMAIN));
        if let Some(location) = &event.location {
            lines.push(format!("LOCATION:{}", escape_text(location)));
        }
        if let Some(notes) = &event.notes {
            lines.push(format!("DESCRIPTION:{}", escape_text(notes)));
        }
        lines.push(format!(
            "CATEGORIES:{}",
            event.event_type.as_str().to_uppercase()
        ));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\r\n")
}

// Escapes the text-value reserved characters from RFC 5545
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use chrono::{NaiveDate, NaiveTime};

    fn event(title: &str, date: NaiveDate) -> CalendarEvent {
        CalendarEvent::new(&ID::new(), None, title, date)
    }

    #[test]
    fn empty_event_set_still_yields_a_valid_envelope() {
        let feed = generate_feed("ITU Calendar", &[], &CourseLookup::new());
        assert!(feed.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(feed.ends_with("\r\nEND:VCALENDAR"));
        assert!(!feed.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn one_event_block_per_input_event_in_input_order() {
        let date = NaiveDate::from_ymd(2026, 3, 10);
        let events = vec![event("first", date), event("second", date)];
        let feed = generate_feed("Test", &events, &CourseLookup::new());

        assert_eq!(feed.matches("BEGIN:VEVENT").count(), 2);
        assert_eq!(feed.matches("END:VEVENT").count(), 2);
        let first = feed.find("SUMMARY:first").unwrap();
        let second = feed.find("SUMMARY:second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let date = NaiveDate::from_ymd(2026, 3, 10);
        let mut e = event("Midterm", date);
        e.start_time = Some(NaiveTime::from_hms(10, 0, 0));
        e.end_time = Some(NaiveTime::from_hms(12, 0, 0));
        let events = vec![e];
        let lookup = CourseLookup::new();

        let first = generate_feed("Test", &events, &lookup);
        let second = generate_feed("Test", &events, &lookup);
        assert_eq!(first, second);
    }

    #[test]
    fn all_day_exam_renders_date_only_with_course_prefix() {
        let owner = ID::new();
        let course = Course::new(&owner, "Algorithms", "#4CAF50");
        let lookup = CourseLookup::from_courses(vec![&course]);

        let mut e = CalendarEvent::new(
            &owner,
            Some(course.id.clone()),
            "Midterm",
            NaiveDate::from_ymd(2026, 3, 10),
        );
        e.event_type = EventType::Exam;

        let feed = generate_feed("Algorithms - ITU", &[e.clone()], &lookup);
        assert!(feed.contains("DTSTART;VALUE=DATE:20260310"));
        assert!(feed.contains("SUMMARY:Algorithms: Midterm"));
        assert!(feed.contains(&format!("UID:{}@itu-cal", e.id)));
        assert!(feed.contains("CATEGORIES:EXAM"));
        assert!(!feed.contains("DTEND"));
    }

    #[test]
    fn timed_event_emits_naive_start_and_end_instants() {
        let mut e = event("Lecture", NaiveDate::from_ymd(2026, 2, 2));
        e.start_time = Some(NaiveTime::from_hms(8, 30, 0));
        e.end_time = Some(NaiveTime::from_hms(10, 0, 0));

        let feed = generate_feed("Test", &[e], &CourseLookup::new());
        assert!(feed.contains("DTSTART:20260202T083000"));
        assert!(feed.contains("DTEND:20260202T100000"));
    }

    #[test]
    fn courseless_holiday_keeps_the_bare_title() {
        let mut e = event("Easter break", NaiveDate::from_ymd(2026, 4, 9));
        e.event_type = EventType::Holiday;
        let feed = generate_feed("Test", &[e], &CourseLookup::new());
        assert!(feed.contains("SUMMARY:Easter break"));
        assert!(feed.contains("CATEGORIES:HOLIDAY"));
    }

    #[test]
    fn reserved_punctuation_is_escaped_everywhere() {
        let mut e = event("a;b,c\\d", NaiveDate::from_ymd(2026, 5, 1));
        e.location = Some("Room 1; wing A".to_string());
        e.notes = Some("line one\nline two".to_string());
        let feed = generate_feed("Cal; name", &[e], &CourseLookup::new());

        assert!(feed.contains("SUMMARY:a\\;b\\,c\\\\d"));
        assert!(feed.contains("LOCATION:Room 1\\; wing A"));
        assert!(feed.contains("DESCRIPTION:line one\\nline two"));
        assert!(feed.contains("X-WR-CALNAME:Cal\\; name"));
    }

    #[test]
    fn untimed_events_sort_before_timed_on_the_same_date() {
        let date = NaiveDate::from_ymd(2026, 3, 10);
        let mut timed_late = event("late", date);
        timed_late.start_time = Some(NaiveTime::from_hms(14, 0, 0));
        let mut timed_early = event("early", date);
        timed_early.start_time = Some(NaiveTime::from_hms(9, 0, 0));
        let untimed = event("allday", date);
        let earlier_date = event("yesterday", NaiveDate::from_ymd(2026, 3, 9));

        let mut events = vec![
            timed_late.clone(),
            untimed.clone(),
            timed_early.clone(),
            earlier_date.clone(),
        ];
        sort_events_for_feed(&mut events);

        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["yesterday", "allday", "early", "late"]);
    }
}

mod course;
mod date;
mod event;
mod feed;
mod notification;
mod reminder;
mod share;
mod shared;
mod subscription;
mod user;

pub use course::{Course, CourseEntry};
pub use date::{month_grid, parse_date, semester_grid, DayInfo, MonthGrid};
pub use event::{CalendarEvent, EventType, InvalidEventTypeError};
pub use feed::{generate_feed, sort_events_for_feed, CourseLookup};
pub use notification::{Channel, NotificationSettings, DEFAULT_NOTIFY_EVENT_TYPES};
pub use reminder::{format_event_line, ReminderDigest};
pub use share::{extract_token, SharedCalendar};
pub use shared::entity::{Entity, ID};
pub use subscription::Subscription;
pub use user::{User, UserSettings};

use crate::event::EventType;
use crate::shared::entity::ID;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

pub const DEFAULT_NOTIFY_EVENT_TYPES: [EventType; 2] =
    [EventType::Deliverable, EventType::Exam];

/// Per-user reminder preferences: which channels to deliver on,
/// where, for which event types and for which day windows. One row
/// per user.
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    pub user_id: ID,
    pub discord_enabled: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub discord_webhook_url: Option<String>,
    pub phone_number: Option<String>,
    /// Empty means the user never picked, which falls back to
    /// `DEFAULT_NOTIFY_EVENT_TYPES`.
    pub notify_event_types: Vec<EventType>,
    pub notify_day_before: bool,
    pub notify_same_day: bool,
    /// Informational only: shown in the UI, not consulted by the
    /// batch which evaluates both day flags on every invocation.
    pub notify_time: Option<NaiveTime>,
}

impl NotificationSettings {
    pub fn new(user_id: &ID) -> Self {
        Self {
            user_id: user_id.clone(),
            discord_enabled: false,
            email_enabled: false,
            sms_enabled: false,
            discord_webhook_url: None,
            phone_number: None,
            notify_event_types: Vec::new(),
            notify_day_before: true,
            notify_same_day: false,
            notify_time: None,
        }
    }

    pub fn enabled_channels(&self) -> Vec<Channel> {
        let mut channels = Vec::new();
        if self.discord_enabled {
            channels.push(Channel::Discord);
        }
        if self.email_enabled {
            channels.push(Channel::Email);
        }
        if self.sms_enabled {
            channels.push(Channel::Sms);
        }
        channels
    }

    pub fn wanted_event_types(&self) -> Vec<EventType> {
        if self.notify_event_types.is_empty() {
            DEFAULT_NOTIFY_EVENT_TYPES.to_vec()
        } else {
            self.notify_event_types.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Discord,
    Email,
    Sms,
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Discord => "discord",
            Self::Email => "email",
            Self::Sms => "sms",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discord" => Ok(Self::Discord),
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            _ => Err(format!("Unknown notification channel: {}", s)),
        }
    }
}

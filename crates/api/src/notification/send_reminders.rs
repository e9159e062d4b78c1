use crate::error::ApiError;
use crate::shared::{
    auth::protect_cron_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Duration;
use itu_calendar_api_structs::send_reminders::APIResponse;
use itu_calendar_domain::{
    format_event_line, Channel, CourseLookup, NotificationSettings, ReminderDigest,
};
use itu_calendar_infra::{AppContext, DiscordEmbed, DiscordMessage};

const TODAY_EMBED_COLOR: u32 = 0x007AFF;
const TOMORROW_EMBED_COLOR: u32 = 0xFF9500;

pub async fn send_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    protect_cron_route(&http_req, &ctx).await?;

    let usecase = SendRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|summary| {
            HttpResponse::Ok().json(APIResponse {
                sent: summary.sent,
                errors: summary.errors,
            })
        })
        .map_err(|_| ApiError::InternalError)
}

#[derive(Debug)]
pub struct SendRemindersUseCase {}

#[derive(Debug)]
pub struct BatchSummary {
    pub sent: usize,
    pub errors: Vec<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

/// The daily reminder fan-out. Each user-settings row is processed
/// independently: a failing provider call lands in the error list
/// and the loop moves on. There is no delivery ledger, so the
/// guarantee is at most once per scheduled tick, not per day.
#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = BatchSummary;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let today = ctx.sys.local_date();
        let tomorrow = today + Duration::days(1);

        let mut summary = BatchSummary {
            sent: 0,
            errors: Vec::new(),
        };

        for settings in ctx.repos.notification_settings.find_enabled().await {
            let mut dates = Vec::with_capacity(2);
            if settings.notify_same_day {
                dates.push(today);
            }
            if settings.notify_day_before {
                dates.push(tomorrow);
            }
            if dates.is_empty() {
                continue;
            }

            let courses = ctx.repos.courses.find_by_user(&settings.user_id).await;
            if courses.is_empty() {
                continue;
            }
            let course_ids = courses.iter().map(|c| c.id.clone()).collect::<Vec<_>>();

            let wanted_types = settings.wanted_event_types();
            let mut events = ctx
                .repos
                .events
                .find_by_courses_on_dates(&course_ids, &dates)
                .await;
            events.retain(|e| wanted_types.contains(&e.event_type));
            if events.is_empty() {
                continue;
            }

            let digest = ReminderDigest::build(events, today, tomorrow);
            if digest.is_empty() {
                continue;
            }

            let lookup = CourseLookup::from_courses(&courses);
            for channel in settings.enabled_channels() {
                match deliver(ctx, &settings, channel, &digest, &lookup).await {
                    Ok(()) => summary.sent += 1,
                    Err(e) => summary
                        .errors
                        .push(format!("user {} {}: {}", settings.user_id, channel, e)),
                }
            }
        }

        Ok(summary)
    }
}

async fn deliver(
    ctx: &AppContext,
    settings: &NotificationSettings,
    channel: Channel,
    digest: &ReminderDigest,
    lookup: &CourseLookup,
) -> anyhow::Result<()> {
    match channel {
        Channel::Discord => {
            let webhook_url = settings
                .discord_webhook_url
                .as_ref()
                .ok_or_else(|| anyhow::Error::msg("no webhook URL configured"))?;
            ctx.notifier
                .send_discord(webhook_url, &discord_message(digest, lookup))
                .await
        }
        Channel::Email => {
            let user = ctx
                .repos
                .users
                .find(&settings.user_id)
                .await
                .ok_or_else(|| anyhow::Error::msg("user account not found"))?;
            let (subject, body) = email_message(digest, lookup);
            ctx.notifier.send_email(&user.email, &subject, &body).await
        }
        Channel::Sms => {
            let phone_number = settings
                .phone_number
                .as_ref()
                .ok_or_else(|| anyhow::Error::msg("no phone number configured"))?;
            ctx.notifier
                .send_sms(phone_number, &sms_message(digest, lookup))
                .await
        }
    }
}

fn bucket_lines(digest: &ReminderDigest, lookup: &CourseLookup) -> (Vec<String>, Vec<String>) {
    let render = |events: &[itu_calendar_domain::CalendarEvent]| {
        events
            .iter()
            .map(|e| {
                let course_name = e.course_id.as_ref().and_then(|id| lookup.name(id));
                format_event_line(e, course_name)
            })
            .collect::<Vec<_>>()
    };
    (render(&digest.today_events), render(&digest.tomorrow_events))
}

fn discord_message(digest: &ReminderDigest, lookup: &CourseLookup) -> DiscordMessage {
    let (today_lines, tomorrow_lines) = bucket_lines(digest, lookup);
    let mut embeds = Vec::with_capacity(2);
    if !today_lines.is_empty() {
        embeds.push(DiscordEmbed {
            title: format!("Today — {}", digest.today.format("%Y-%m-%d")),
            description: today_lines.join("\n"),
            color: TODAY_EMBED_COLOR,
            footer: None,
        });
    }
    if !tomorrow_lines.is_empty() {
        embeds.push(DiscordEmbed {
            title: format!("Tomorrow — {}", digest.tomorrow.format("%Y-%m-%d")),
            description: tomorrow_lines.join("\n"),
            color: TOMORROW_EMBED_COLOR,
            footer: None,
        });
    }
    DiscordMessage { embeds }
}

fn email_message(digest: &ReminderDigest, lookup: &CourseLookup) -> (String, String) {
    let (today_lines, tomorrow_lines) = bucket_lines(digest, lookup);
    let subject = format!("Course reminders for {}", digest.today.format("%Y-%m-%d"));
    let mut sections = Vec::with_capacity(2);
    if !today_lines.is_empty() {
        sections.push(format!("Today:\n{}", today_lines.join("\n")));
    }
    if !tomorrow_lines.is_empty() {
        sections.push(format!("Tomorrow:\n{}", tomorrow_lines.join("\n")));
    }
    (subject, sections.join("\n\n"))
}

fn sms_message(digest: &ReminderDigest, lookup: &CourseLookup) -> String {
    let (today_lines, tomorrow_lines) = bucket_lines(digest, lookup);
    let mut parts = Vec::with_capacity(2);
    if !today_lines.is_empty() {
        parts.push(format!("Today: {}", today_lines.join("; ")));
    }
    if !tomorrow_lines.is_empty() {
        parts.push(format!("Tomorrow: {}", tomorrow_lines.join("; ")));
    }
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use itu_calendar_domain::{parse_date, CalendarEvent, Course, EventType, User, ID};
    use itu_calendar_infra::{setup_context, ISys, InMemoryNotifier};
    use std::sync::Arc;

    struct StaticSys {
        date: NaiveDate,
    }
    impl ISys for StaticSys {
        fn local_date(&self) -> NaiveDate {
            self.date
        }
        fn get_timestamp_millis(&self) -> i64 {
            0
        }
    }

    async fn batch_context(today: &str) -> (AppContext, Arc<InMemoryNotifier>) {
        let mut ctx = setup_context().await;
        let notifier = Arc::new(InMemoryNotifier::new());
        ctx.notifier = notifier.clone();
        ctx.sys = Arc::new(StaticSys {
            date: parse_date(today).unwrap(),
        });
        (ctx, notifier)
    }

    async fn user_with_exam_today(ctx: &AppContext, today: &str) -> ID {
        let user = User::new("ada@itu.dk", "session-1");
        ctx.repos.users.insert(&user).await.unwrap();
        let course = Course::new(&user.id, "Algorithms", "#4CAF50");
        ctx.repos.courses.insert(&course).await.unwrap();

        let mut exam = CalendarEvent::new(
            &user.id,
            Some(course.id.clone()),
            "Midterm",
            parse_date(today).unwrap(),
        );
        exam.event_type = EventType::Exam;
        ctx.repos.events.insert(&exam).await.unwrap();

        let mut lecture = CalendarEvent::new(
            &user.id,
            Some(course.id),
            "Graph theory",
            parse_date(today).unwrap(),
        );
        lecture.event_type = EventType::Lecture;
        ctx.repos.events.insert(&lecture).await.unwrap();

        user.id
    }

    #[tokio::test]
    async fn filters_to_wanted_types_and_sends_one_line() {
        let (ctx, notifier) = batch_context("2026-03-10").await;
        let user_id = user_with_exam_today(&ctx, "2026-03-10").await;

        let mut settings = NotificationSettings::new(&user_id);
        settings.sms_enabled = true;
        settings.phone_number = Some("+4512345678".into());
        settings.notify_same_day = true;
        settings.notify_day_before = false;
        settings.notify_event_types = vec![EventType::Exam];
        ctx.repos.notification_settings.upsert(&settings).await.unwrap();

        let mut usecase = SendRemindersUseCase {};
        let summary = usecase.execute(&ctx).await.unwrap();
        assert_eq!(summary.sent, 1);
        assert!(summary.errors.is_empty());

        let sent = notifier.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].channel, Channel::Sms);
        assert!(sent[0].body.contains("Midterm (Algorithms) [exam]"));
        assert!(!sent[0].body.contains("Graph theory"));
    }

    #[tokio::test]
    async fn channel_less_users_are_skipped_without_error() {
        let (ctx, notifier) = batch_context("2026-03-10").await;
        let user_id = user_with_exam_today(&ctx, "2026-03-10").await;

        let mut settings = NotificationSettings::new(&user_id);
        settings.notify_same_day = true;
        ctx.repos.notification_settings.upsert(&settings).await.unwrap();

        let mut usecase = SendRemindersUseCase {};
        let summary = usecase.execute(&ctx).await.unwrap();
        assert_eq!(summary.sent, 0);
        assert!(summary.errors.is_empty());
        assert!(notifier.sent_messages().is_empty());
    }

    #[tokio::test]
    async fn day_before_window_catches_tomorrows_deliverable() {
        let (ctx, notifier) = batch_context("2026-03-10").await;
        let user = User::new("ada@itu.dk", "session-1");
        ctx.repos.users.insert(&user).await.unwrap();
        let course = Course::new(&user.id, "Algorithms", "#4CAF50");
        ctx.repos.courses.insert(&course).await.unwrap();
        let mut handin = CalendarEvent::new(
            &user.id,
            Some(course.id),
            "Hand-in 3",
            parse_date("2026-03-11").unwrap(),
        );
        handin.event_type = EventType::Deliverable;
        ctx.repos.events.insert(&handin).await.unwrap();

        let mut settings = NotificationSettings::new(&user.id);
        settings.email_enabled = true;
        ctx.repos.notification_settings.upsert(&settings).await.unwrap();

        let mut usecase = SendRemindersUseCase {};
        let summary = usecase.execute(&ctx).await.unwrap();
        assert_eq!(summary.sent, 1);

        let sent = notifier.sent_messages();
        assert_eq!(sent[0].channel, Channel::Email);
        assert_eq!(sent[0].address, "ada@itu.dk");
        assert!(sent[0].body.contains("Tomorrow:"));
        assert!(sent[0].body.contains("Hand-in 3"));
    }

    #[tokio::test]
    async fn one_failing_channel_does_not_block_the_other() {
        let (ctx, notifier) = batch_context("2026-03-10").await;
        let user_id = user_with_exam_today(&ctx, "2026-03-10").await;

        let mut settings = NotificationSettings::new(&user_id);
        settings.discord_enabled = true;
        settings.discord_webhook_url = Some("https://discord.test/hook".into());
        settings.sms_enabled = true;
        settings.phone_number = Some("+4512345678".into());
        settings.notify_same_day = true;
        ctx.repos.notification_settings.upsert(&settings).await.unwrap();
        notifier.fail_channel(Channel::Discord);

        let mut usecase = SendRemindersUseCase {};
        let summary = usecase.execute(&ctx).await.unwrap();
        assert_eq!(summary.sent, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].contains("discord"));

        let sent = notifier.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].channel, Channel::Sms);
    }

    #[tokio::test]
    async fn one_failing_user_does_not_abort_the_batch() {
        let (ctx, notifier) = batch_context("2026-03-10").await;

        let broken_id = user_with_exam_today(&ctx, "2026-03-10").await;
        let mut broken = NotificationSettings::new(&broken_id);
        broken.discord_enabled = true;
        // Enabled channel with no webhook stored
        broken.notify_same_day = true;
        ctx.repos.notification_settings.upsert(&broken).await.unwrap();

        let healthy_user = User::new("bob@itu.dk", "session-2");
        ctx.repos.users.insert(&healthy_user).await.unwrap();
        let course = Course::new(&healthy_user.id, "Databases", "#FF9500");
        ctx.repos.courses.insert(&course).await.unwrap();
        let mut exam = CalendarEvent::new(
            &healthy_user.id,
            Some(course.id),
            "Final",
            parse_date("2026-03-10").unwrap(),
        );
        exam.event_type = EventType::Exam;
        ctx.repos.events.insert(&exam).await.unwrap();
        let mut healthy = NotificationSettings::new(&healthy_user.id);
        healthy.email_enabled = true;
        healthy.notify_same_day = true;
        ctx.repos.notification_settings.upsert(&healthy).await.unwrap();

        let mut usecase = SendRemindersUseCase {};
        let summary = usecase.execute(&ctx).await.unwrap();
        assert_eq!(summary.sent, 1);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(notifier.sent_messages()[0].address, "bob@itu.dk");
    }

    #[tokio::test]
    async fn empty_digests_are_never_delivered() {
        let (ctx, notifier) = batch_context("2026-03-10").await;
        let user = User::new("ada@itu.dk", "session-1");
        ctx.repos.users.insert(&user).await.unwrap();
        let course = Course::new(&user.id, "Algorithms", "#4CAF50");
        ctx.repos.courses.insert(&course).await.unwrap();
        // Only a lecture today, which the default types exclude
        let lecture = CalendarEvent::new(
            &user.id,
            Some(course.id),
            "Graph theory",
            parse_date("2026-03-10").unwrap(),
        );
        ctx.repos.events.insert(&lecture).await.unwrap();

        let mut settings = NotificationSettings::new(&user.id);
        settings.email_enabled = true;
        settings.notify_same_day = true;
        ctx.repos.notification_settings.upsert(&settings).await.unwrap();

        let mut usecase = SendRemindersUseCase {};
        let summary = usecase.execute(&ctx).await.unwrap();
        assert_eq!(summary.sent, 0);
        assert!(summary.errors.is_empty());
        assert!(notifier.sent_messages().is_empty());
    }
}

use crate::notification::SendRemindersUseCase;
use crate::shared::usecase::execute;
use itu_calendar_infra::AppContext;
use std::time::Duration;
use tracing::info;

const DAY: Duration = Duration::from_secs(60 * 60 * 24);

/// In-process daily trigger for the reminder batch, alongside the
/// external POST endpoint. The first interval tick fires immediately
/// and is consumed before the loop so booting the server does not
/// send a round on its own.
pub fn start_send_reminders_job(ctx: AppContext) {
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(DAY);
        interval.tick().await;
        loop {
            interval.tick().await;
            let usecase = SendRemindersUseCase {};
            match execute(usecase, &ctx).await {
                Ok(summary) => info!(
                    "Reminder batch finished. Sent: {}, errors: {}",
                    summary.sent,
                    summary.errors.len()
                ),
                Err(_) => {}
            }
        }
    });
}

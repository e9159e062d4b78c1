use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::send_test_notification::{APIResponse, ErrorResponse, RequestBody};
use itu_calendar_domain::{Channel, User};
use itu_calendar_infra::{AppContext, DiscordEmbed, DiscordMessage};

const TEST_MESSAGE: &str = "Test notification from ITU Calendar. Your channel is set up correctly.";

pub async fn send_test_notification_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    // Authenticate before touching any address so this path cannot be
    // used to probe third-party endpoints anonymously
    let user = protect_route(&http_req, &ctx).await?;
    let body = body.into_inner();

    let usecase = SendTestNotificationUseCase {
        user,
        channel: body.channel,
        phone_number: body.phone_number,
    };

    match execute(usecase, &ctx).await {
        Ok(_) => Ok(HttpResponse::Ok().json(APIResponse { ok: true })),
        Err(UseCaseErrors::MissingAddress(msg)) => Err(ApiError::BadClientData(msg)),
        // The provider's own status/message goes back to the caller
        // so a misconfigured webhook or number can be diagnosed
        Err(UseCaseErrors::SendFailed(error)) => {
            Ok(HttpResponse::InternalServerError().json(ErrorResponse { error }))
        }
    }
}

#[derive(Debug)]
struct SendTestNotificationUseCase {
    user: User,
    channel: Channel,
    phone_number: Option<String>,
}

#[derive(Debug)]
enum UseCaseErrors {
    MissingAddress(String),
    SendFailed(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendTestNotificationUseCase {
    type Response = ();
    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendTestNotification";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let res = match self.channel {
            Channel::Discord => {
                let settings = ctx
                    .repos
                    .notification_settings
                    .find_by_user(&self.user.id)
                    .await;
                let webhook_url = settings
                    .and_then(|s| s.discord_webhook_url)
                    .ok_or_else(|| {
                        UseCaseErrors::MissingAddress(
                            "No Discord webhook URL is configured".into(),
                        )
                    })?;
                let message = DiscordMessage {
                    embeds: vec![DiscordEmbed {
                        title: "Test notification".to_string(),
                        description: TEST_MESSAGE.to_string(),
                        color: 0x007AFF,
                        footer: None,
                    }],
                };
                ctx.notifier.send_discord(&webhook_url, &message).await
            }
            Channel::Email => {
                ctx.notifier
                    .send_email(&self.user.email, "Test notification", TEST_MESSAGE)
                    .await
            }
            Channel::Sms => {
                // Destination comes from the request so a number can
                // be tried before it is saved
                let phone_number = self.phone_number.take().ok_or_else(|| {
                    UseCaseErrors::MissingAddress(
                        "A phone number is required for an SMS test".into(),
                    )
                })?;
                ctx.notifier.send_sms(&phone_number, TEST_MESSAGE).await
            }
        };

        res.map_err(|e| UseCaseErrors::SendFailed(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itu_calendar_domain::NotificationSettings;
    use itu_calendar_infra::{setup_context, InMemoryNotifier};
    use std::sync::Arc;

    async fn test_context() -> (AppContext, Arc<InMemoryNotifier>) {
        let mut ctx = setup_context().await;
        let notifier = Arc::new(InMemoryNotifier::new());
        ctx.notifier = notifier.clone();
        (ctx, notifier)
    }

    #[tokio::test]
    async fn sms_test_uses_the_supplied_number() {
        let (ctx, notifier) = test_context().await;
        let user = User::new("ada@itu.dk", "session-1");
        ctx.repos.users.insert(&user).await.unwrap();

        let mut usecase = SendTestNotificationUseCase {
            user,
            channel: Channel::Sms,
            phone_number: Some("+4512345678".into()),
        };
        usecase.execute(&ctx).await.unwrap();

        let sent = notifier.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].address, "+4512345678");
        assert!(sent[0].body.contains("Test notification"));
    }

    #[tokio::test]
    async fn sms_test_without_a_number_is_rejected() {
        let (ctx, notifier) = test_context().await;
        let user = User::new("ada@itu.dk", "session-1");
        ctx.repos.users.insert(&user).await.unwrap();

        let mut usecase = SendTestNotificationUseCase {
            user,
            channel: Channel::Sms,
            phone_number: None,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::MissingAddress(_))
        ));
        assert!(notifier.sent_messages().is_empty());
    }

    #[tokio::test]
    async fn discord_test_reads_the_stored_webhook() {
        let (ctx, notifier) = test_context().await;
        let user = User::new("ada@itu.dk", "session-1");
        ctx.repos.users.insert(&user).await.unwrap();
        let mut settings = NotificationSettings::new(&user.id);
        settings.discord_webhook_url = Some("https://discord.test/hook".into());
        ctx.repos.notification_settings.upsert(&settings).await.unwrap();

        let mut usecase = SendTestNotificationUseCase {
            user,
            channel: Channel::Discord,
            phone_number: None,
        };
        usecase.execute(&ctx).await.unwrap();
        assert_eq!(notifier.sent_messages()[0].address, "https://discord.test/hook");
    }

    #[tokio::test]
    async fn provider_failure_is_reported() {
        let (ctx, notifier) = test_context().await;
        notifier.fail_channel(Channel::Email);
        let user = User::new("ada@itu.dk", "session-1");
        ctx.repos.users.insert(&user).await.unwrap();

        let mut usecase = SendTestNotificationUseCase {
            user,
            channel: Channel::Email,
            phone_number: None,
        };
        match usecase.execute(&ctx).await {
            Err(UseCaseErrors::SendFailed(msg)) => {
                assert!(msg.contains("provider returned 500"))
            }
            other => panic!("Expected SendFailed, got {:?}", other),
        }
    }
}

use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::update_notification_settings::{APIResponse, RequestBody};
use itu_calendar_domain::{NotificationSettings, ID};
use itu_calendar_infra::AppContext;

pub async fn update_notification_settings_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateNotificationSettingsUseCase {
        user_id: user.id,
        body: body.into_inner(),
    };

    execute(usecase, &ctx)
        .await
        .map(|settings| HttpResponse::Ok().json(APIResponse::new(settings)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::MissingAddress(msg) => ApiError::BadClientData(msg),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct UpdateNotificationSettingsUseCase {
    user_id: ID,
    body: RequestBody,
}

#[derive(Debug)]
enum UseCaseErrors {
    MissingAddress(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateNotificationSettingsUseCase {
    type Response = NotificationSettings;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "UpdateNotificationSettings";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let mut settings = ctx
            .repos
            .notification_settings
            .find_by_user(&self.user_id)
            .await
            .unwrap_or_else(|| NotificationSettings::new(&self.user_id));

        if let Some(enabled) = self.body.discord_enabled {
            settings.discord_enabled = enabled;
        }
        if let Some(enabled) = self.body.email_enabled {
            settings.email_enabled = enabled;
        }
        if let Some(enabled) = self.body.sms_enabled {
            settings.sms_enabled = enabled;
        }
        if let Some(url) = self.body.discord_webhook_url.take() {
            settings.discord_webhook_url = url.filter(|u| !u.trim().is_empty());
        }
        if let Some(number) = self.body.phone_number.take() {
            settings.phone_number = number.filter(|n| !n.trim().is_empty());
        }
        if let Some(types) = self.body.notify_event_types.take() {
            settings.notify_event_types = types;
        }
        if let Some(day_before) = self.body.notify_day_before {
            settings.notify_day_before = day_before;
        }
        if let Some(same_day) = self.body.notify_same_day {
            settings.notify_same_day = same_day;
        }
        if let Some(time) = self.body.notify_time {
            settings.notify_time = time;
        }

        if settings.discord_enabled && settings.discord_webhook_url.is_none() {
            return Err(UseCaseErrors::MissingAddress(
                "Discord cannot be enabled without a webhook URL".into(),
            ));
        }
        if settings.sms_enabled && settings.phone_number.is_none() {
            return Err(UseCaseErrors::MissingAddress(
                "SMS cannot be enabled without a phone number".into(),
            ));
        }

        ctx.repos
            .notification_settings
            .upsert(&settings)
            .await
            .map(|_| settings)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

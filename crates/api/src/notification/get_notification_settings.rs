use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::get_notification_settings::APIResponse;
use itu_calendar_domain::{NotificationSettings, ID};
use itu_calendar_infra::AppContext;

pub async fn get_notification_settings_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetNotificationSettingsUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|settings| HttpResponse::Ok().json(APIResponse::new(settings)))
        .map_err(|_| ApiError::InternalError)
}

#[derive(Debug)]
struct GetNotificationSettingsUseCase {
    user_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    StorageError,
}

/// Users without a stored row get the defaults, so the settings page
/// never needs a separate "create" call.
#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationSettingsUseCase {
    type Response = NotificationSettings;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetNotificationSettings";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx
            .repos
            .notification_settings
            .find_by_user(&self.user_id)
            .await
            .unwrap_or_else(|| NotificationSettings::new(&self.user_id)))
    }
}

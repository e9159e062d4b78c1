use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::get_events::APIResponse;
use itu_calendar_domain::{sort_events_for_feed, CalendarEvent, ID};
use itu_calendar_infra::AppContext;

pub async fn get_events_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetEventsUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(|_| ApiError::InternalError)
}

#[derive(Debug)]
struct GetEventsUseCase {
    user_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    StorageError,
}

/// All events visible to a user: their own (including holidays) plus
/// the events of every course they subscribe to, in calendar order.
#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = Vec<CalendarEvent>;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let mut events = ctx.repos.events.find_by_user(&self.user_id).await;

        let subscriptions = ctx.repos.subscriptions.find_by_subscriber(&self.user_id).await;
        let source_ids = subscriptions
            .iter()
            .map(|s| s.source_course_id.clone())
            .collect::<Vec<_>>();
        events.extend(ctx.repos.events.find_by_courses(&source_ids).await);

        sort_events_for_feed(&mut events);
        Ok(events)
    }
}

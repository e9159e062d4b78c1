use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::delete_event::{APIResponse, PathParams};
use itu_calendar_domain::{CalendarEvent, ID};
use itu_calendar_infra::AppContext;

pub async fn delete_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteEventUseCase {
        user_id: user.id,
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(event_id) => {
            ApiError::NotFound(format!("Event with id: {} was not found", event_id))
        }
        UseCaseErrors::ReadOnly => {
            ApiError::ReadOnly("Events of a subscribed course cannot be deleted".into())
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct DeleteEventUseCase {
    user_id: ID,
    event_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    ReadOnly,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = CalendarEvent;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let event = match ctx.repos.events.find(&self.event_id).await {
            Some(event) => event,
            None => return Err(UseCaseErrors::NotFound(self.event_id.clone())),
        };
        if event.user_id != self.user_id {
            let subscribed = match &event.course_id {
                Some(course_id) => ctx
                    .repos
                    .subscriptions
                    .find_by_subscriber(&self.user_id)
                    .await
                    .into_iter()
                    .any(|s| s.source_course_id == *course_id),
                None => false,
            };
            return if subscribed {
                Err(UseCaseErrors::ReadOnly)
            } else {
                Err(UseCaseErrors::NotFound(self.event_id.clone()))
            };
        }

        ctx.repos
            .events
            .delete(&self.event_id)
            .await
            .ok_or(UseCaseErrors::StorageError)
    }
}

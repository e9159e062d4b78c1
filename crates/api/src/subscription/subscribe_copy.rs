use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::subscribe_copy::{APIResponse, RequestBody};
use itu_calendar_domain::{extract_token, CalendarEvent, Course, ID};
use itu_calendar_infra::AppContext;

use super::subscribe_live::{next_sort_order, resolve_active_share};

pub async fn subscribe_copy_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = SubscribeCopyUseCase {
        user_id: user.id,
        token: body.token.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|course| HttpResponse::Created().json(APIResponse::new(course)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::MissingToken => {
            ApiError::BadClientData("No share token found in the provided input".into())
        }
        UseCaseErrors::InvalidToken => ApiError::NotFound("The share token is not valid".into()),
        UseCaseErrors::OwnCourse => {
            ApiError::Conflict("You cannot subscribe to your own course".into())
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct SubscribeCopyUseCase {
    user_id: ID,
    token: String,
}

#[derive(Debug)]
enum UseCaseErrors {
    MissingToken,
    InvalidToken,
    OwnCourse,
    StorageError,
}

/// Copy mode takes a one-time snapshot: a new owned course plus
/// duplicated event rows, fully editable and never updated again
/// when the source changes. A partial copy is rolled back rather
/// than left behind.
#[async_trait::async_trait(?Send)]
impl UseCase for SubscribeCopyUseCase {
    type Response = Course;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "SubscribeCopy";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let token = extract_token(&self.token).ok_or(UseCaseErrors::MissingToken)?;
        let (_, source) = resolve_active_share(&token, ctx)
            .await
            .ok_or(UseCaseErrors::InvalidToken)?;
        if source.user_id == self.user_id {
            return Err(UseCaseErrors::OwnCourse);
        }

        let mut course = Course::new(&self.user_id, &source.name, &source.color);
        course.sort_order = next_sort_order(&self.user_id, ctx).await;
        ctx.repos
            .courses
            .insert(&course)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let source_events = ctx.repos.events.find_by_course(&source.id).await;
        let mut copied_ids = Vec::with_capacity(source_events.len());
        for source_event in source_events {
            let mut event = CalendarEvent::new(
                &self.user_id,
                Some(course.id.clone()),
                &source_event.title,
                source_event.date,
            );
            event.start_time = source_event.start_time;
            event.end_time = source_event.end_time;
            event.event_type = source_event.event_type;
            event.notes = source_event.notes.clone();
            event.location = source_event.location.clone();

            if ctx.repos.events.insert(&event).await.is_err() {
                for event_id in &copied_ids {
                    let _ = ctx.repos.events.delete(event_id).await;
                }
                let _ = ctx.repos.courses.delete(&course.id).await;
                return Err(UseCaseErrors::StorageError);
            }
            copied_ids.push(event.id);
        }

        Ok(course)
    }
}

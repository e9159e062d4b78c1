use crate::error::ApiError;
use crate::shared::{
    auth::{protect_route, resolve_course_access, CourseAccess},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{NaiveDate, NaiveTime};
use itu_calendar_api_structs::create_event::{APIResponse, RequestBody};
use itu_calendar_domain::{CalendarEvent, EventType, ID};
use itu_calendar_infra::AppContext;

pub async fn create_event_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;
    let body = body.into_inner();

    let usecase = CreateEventUseCase {
        user_id: user.id,
        course_id: body.course_id,
        title: body.title,
        date: body.date,
        start_time: body.start_time,
        end_time: body.end_time,
        event_type: body.event_type,
        notes: body.notes,
        location: body.location,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::CourseNotFound(course_id) => {
            ApiError::NotFound(format!("Course with id: {} was not found", course_id))
        }
        UseCaseErrors::ReadOnly => {
            ApiError::ReadOnly("Events cannot be added to a subscribed course".into())
        }
        UseCaseErrors::InvalidEvent(msg) => ApiError::BadClientData(msg),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct CreateEventUseCase {
    user_id: ID,
    course_id: Option<ID>,
    title: String,
    date: NaiveDate,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    event_type: EventType,
    notes: Option<String>,
    location: Option<String>,
}

#[derive(Debug)]
enum UseCaseErrors {
    CourseNotFound(ID),
    ReadOnly,
    InvalidEvent(String),
    StorageError,
}

/// Holidays are the only course-less events; everything else must
/// hang off a course the caller owns.
fn validate_course_link(course_id: &Option<ID>, event_type: EventType) -> Result<(), String> {
    match (course_id, event_type) {
        (None, EventType::Holiday) => Ok(()),
        (None, other) => Err(format!("An event of type {} must belong to a course", other)),
        (Some(_), EventType::Holiday) => {
            Err("Holidays are calendar-wide and cannot belong to a course".to_string())
        }
        (Some(_), _) => Ok(()),
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = CalendarEvent;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        if self.title.trim().is_empty() {
            return Err(UseCaseErrors::InvalidEvent(
                "Event title must not be empty".into(),
            ));
        }
        validate_course_link(&self.course_id, self.event_type)
            .map_err(UseCaseErrors::InvalidEvent)?;
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end < start {
                return Err(UseCaseErrors::InvalidEvent(
                    "Event end time must not precede its start time".into(),
                ));
            }
        }
        if self.end_time.is_some() && self.start_time.is_none() {
            return Err(UseCaseErrors::InvalidEvent(
                "An event with an end time needs a start time".into(),
            ));
        }

        if let Some(course_id) = &self.course_id {
            match resolve_course_access(&self.user_id, course_id, ctx).await {
                CourseAccess::Owned(_) => {}
                CourseAccess::Subscribed(_) => return Err(UseCaseErrors::ReadOnly),
                CourseAccess::Unknown => {
                    return Err(UseCaseErrors::CourseNotFound(course_id.clone()))
                }
            }
        }

        let mut event = CalendarEvent::new(
            &self.user_id,
            self.course_id.clone(),
            self.title.trim(),
            self.date,
        );
        event.start_time = self.start_time;
        event.end_time = self.end_time;
        event.event_type = self.event_type;
        event.notes = self.notes.take();
        event.location = self.location.take();

        ctx.repos
            .events
            .insert(&event)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

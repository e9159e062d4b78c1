use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{NaiveDate, NaiveTime};
use itu_calendar_api_structs::update_event::{APIResponse, PathParams, RequestBody};
use itu_calendar_domain::{CalendarEvent, EventType, ID};
use itu_calendar_infra::AppContext;

pub async fn update_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;
    let body = body.into_inner();

    let usecase = UpdateEventUseCase {
        user_id: user.id,
        event_id: path_params.event_id.clone(),
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
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(event_id) => {
            ApiError::NotFound(format!("Event with id: {} was not found", event_id))
        }
        UseCaseErrors::ReadOnly => {
            ApiError::ReadOnly("Events of a subscribed course cannot be edited".into())
        }
        UseCaseErrors::InvalidEvent(msg) => ApiError::BadClientData(msg),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct UpdateEventUseCase {
    user_id: ID,
    event_id: ID,
    title: Option<String>,
    date: Option<NaiveDate>,
    // Outer layer: field present in the request. Inner layer: set or
    // clear the value.
    start_time: Option<Option<NaiveTime>>,
    end_time: Option<Option<NaiveTime>>,
    event_type: Option<EventType>,
    notes: Option<Option<String>>,
    location: Option<Option<String>>,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    ReadOnly,
    InvalidEvent(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = CalendarEvent;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let mut event = match ctx.repos.events.find(&self.event_id).await {
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

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(UseCaseErrors::InvalidEvent(
                    "Event title must not be empty".into(),
                ));
            }
            event.title = title.trim().to_string();
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = end_time;
        }
        if let Some(event_type) = self.event_type {
            if (event_type == EventType::Holiday) != event.course_id.is_none() {
                return Err(UseCaseErrors::InvalidEvent(
                    "Only course-less events can be holidays".into(),
                ));
            }
            event.event_type = event_type;
        }
        if let Some(notes) = self.notes.take() {
            event.notes = notes;
        }
        if let Some(location) = self.location.take() {
            event.location = location;
        }

        if let (Some(start), Some(end)) = (event.start_time, event.end_time) {
            if end < start {
                return Err(UseCaseErrors::InvalidEvent(
                    "Event end time must not precede its start time".into(),
                ));
            }
        }
        if event.end_time.is_some() && event.start_time.is_none() {
            return Err(UseCaseErrors::InvalidEvent(
                "An event with an end time needs a start time".into(),
            ));
        }

        ctx.repos
            .events
            .save(&event)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itu_calendar_domain::{parse_date, Course, Subscription};
    use itu_calendar_infra::setup_context;

    fn noop_update(user_id: ID, event_id: ID) -> UpdateEventUseCase {
        UpdateEventUseCase {
            user_id,
            event_id,
            title: None,
            date: None,
            start_time: None,
            end_time: None,
            event_type: None,
            notes: None,
            location: None,
        }
    }

    #[tokio::test]
    async fn owner_can_move_and_clear_fields() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let mut event = CalendarEvent::new(
            &user_id,
            Some(ID::default()),
            "Midterm",
            parse_date("2026-03-10").unwrap(),
        );
        event.start_time = NaiveTime::from_hms_opt(9, 0, 0);
        event.location = Some("Aud 1".into());
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = noop_update(user_id, event.id.clone());
        usecase.date = parse_date("2026-03-12").ok();
        usecase.start_time = Some(None);
        usecase.location = Some(None);
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.date, parse_date("2026-03-12").unwrap());
        assert!(updated.start_time.is_none());
        assert!(updated.location.is_none());
        assert_eq!(updated.title, "Midterm");
    }

    #[tokio::test]
    async fn subscriber_cannot_edit_source_events() {
        let ctx = setup_context().await;
        let subscriber = ID::default();
        let owner = ID::default();
        let course = Course::new(&owner, "Algorithms", "#4CAF50");
        ctx.repos.courses.insert(&course).await.unwrap();
        let event = CalendarEvent::new(
            &owner,
            Some(course.id.clone()),
            "Midterm",
            parse_date("2026-03-10").unwrap(),
        );
        ctx.repos.events.insert(&event).await.unwrap();
        let subscription = Subscription::new(&subscriber, &ID::default(), &course);
        ctx.repos.subscriptions.insert(&subscription).await.unwrap();

        let mut usecase = noop_update(subscriber, event.id.clone());
        usecase.title = Some("Hijacked".into());
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::ReadOnly)
        ));
        let unchanged = ctx.repos.events.find(&event.id).await.unwrap();
        assert_eq!(unchanged.title, "Midterm");
    }

    #[tokio::test]
    async fn strangers_get_not_found() {
        let ctx = setup_context().await;
        let event = CalendarEvent::new(
            &ID::default(),
            Some(ID::default()),
            "Midterm",
            parse_date("2026-03-10").unwrap(),
        );
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = noop_update(ID::default(), event.id);
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::NotFound(_))
        ));
    }
}

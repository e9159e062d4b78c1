use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use itu_calendar_domain::{generate_feed, sort_events_for_feed, CourseLookup};
use itu_calendar_infra::AppContext;
use serde::Deserialize;

use super::{feed_filename, ics_response};

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub token: Option<String>,
}

pub async fn get_course_feed_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let token = match &query.token {
        Some(token) if !token.trim().is_empty() => token.trim().to_string(),
        _ => return Err(ApiError::BadClientData("Missing token query parameter".into())),
    };

    let usecase = GetCourseFeedUseCase { token };

    execute(usecase, &ctx)
        .await
        .map(|(feed, course_name)| ics_response(feed, &feed_filename(&course_name)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        // One signal for unknown and revoked tokens
        UseCaseErrors::InvalidToken => ApiError::NotFound("The share token is not valid".into()),
    }
}

#[derive(Debug)]
struct GetCourseFeedUseCase {
    token: String,
}

#[derive(Debug)]
enum UseCaseErrors {
    InvalidToken,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCourseFeedUseCase {
    type Response = (String, String);
    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetCourseFeed";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let share = ctx
            .repos
            .shares
            .find_by_token(&self.token)
            .await
            .filter(|share| share.is_active)
            .ok_or(UseCaseErrors::InvalidToken)?;
        let course = ctx
            .repos
            .courses
            .find(&share.course_id)
            .await
            .ok_or(UseCaseErrors::InvalidToken)?;

        let mut events = ctx.repos.events.find_by_course(&course.id).await;
        sort_events_for_feed(&mut events);

        let courses = CourseLookup::from_courses(&[course.clone()]);
        let feed = generate_feed(&course.name, &events, &courses);
        Ok((feed, course.name))
    }
}

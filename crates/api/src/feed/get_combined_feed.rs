use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use itu_calendar_domain::{generate_feed, sort_events_for_feed, CourseLookup};
use itu_calendar_infra::AppContext;
use serde::Deserialize;

use super::ics_response;

const COMBINED_CALENDAR_NAME: &str = "ITU Calendar";
const COMBINED_FILENAME: &str = "itu-calendar.ics";

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub token: Option<String>,
}

pub async fn get_combined_feed_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let token = match &query.token {
        Some(token) if !token.trim().is_empty() => token.trim().to_string(),
        _ => return Err(ApiError::BadClientData("Missing token query parameter".into())),
    };

    let usecase = GetCombinedFeedUseCase { token };

    execute(usecase, &ctx)
        .await
        .map(|feed| ics_response(feed, COMBINED_FILENAME))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::InvalidToken => ApiError::NotFound("The share token is not valid".into()),
    }
}

#[derive(Debug)]
struct GetCombinedFeedUseCase {
    token: String,
}

#[derive(Debug)]
enum UseCaseErrors {
    InvalidToken,
}

/// The all-courses feed: events of every active owned course, every
/// active subscription's source course, and the user's holidays, in
/// one calendar.
#[async_trait::async_trait(?Send)]
impl UseCase for GetCombinedFeedUseCase {
    type Response = String;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetCombinedFeed";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let user = ctx
            .repos
            .users
            .find_by_combined_share_token(&self.token)
            .await
            .ok_or(UseCaseErrors::InvalidToken)?;

        let owned = ctx.repos.courses.find_by_user(&user.id).await;
        let subscriptions = ctx.repos.subscriptions.find_by_subscriber(&user.id).await;
        let source_ids = subscriptions
            .iter()
            .filter(|s| s.active)
            .map(|s| s.source_course_id.clone())
            .collect::<Vec<_>>();
        let sources = ctx.repos.courses.find_many(&source_ids).await;

        let mut course_ids = owned
            .iter()
            .filter(|c| c.active)
            .map(|c| c.id.clone())
            .collect::<Vec<_>>();
        course_ids.extend(source_ids);

        let mut events = ctx.repos.events.find_by_courses(&course_ids).await;
        events.extend(ctx.repos.events.find_holidays_by_user(&user.id).await);
        sort_events_for_feed(&mut events);

        let mut courses = CourseLookup::from_courses(&owned);
        for course in &sources {
            courses.insert(course);
        }

        Ok(generate_feed(COMBINED_CALENDAR_NAME, &events, &courses))
    }
}

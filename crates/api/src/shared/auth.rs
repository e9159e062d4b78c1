use crate::error::ApiError;
use actix_web::HttpRequest;
use itu_calendar_domain::{Course, User, ID};
use itu_calendar_infra::AppContext;

fn parse_bearer_header(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get("Authorization")?;
    let value = header.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Resolves the caller's opaque session credential to a `User`.
/// Session management itself is an external collaborator; this guard
/// only rejects missing/unknown credentials before any use case runs.
pub async fn protect_route(req: &HttpRequest, ctx: &AppContext) -> Result<User, ApiError> {
    let token = parse_bearer_header(req).ok_or_else(|| {
        ApiError::Unauthorized("Missing or malformed Authorization header".to_string())
    })?;

    ctx.repos
        .users
        .find_by_session_token(&token)
        .await
        .ok_or_else(|| ApiError::Unauthorized("Invalid session credential".to_string()))
}

/// How a user may touch a course. Subscribed data is always
/// read-only; every mutation entry point resolves this first instead
/// of trusting UI state.
#[derive(Debug)]
pub enum CourseAccess {
    Owned(Course),
    Subscribed(Course),
    Unknown,
}

pub async fn resolve_course_access(
    user_id: &ID,
    course_id: &ID,
    ctx: &AppContext,
) -> CourseAccess {
    let course = match ctx.repos.courses.find(course_id).await {
        Some(course) => course,
        None => return CourseAccess::Unknown,
    };
    if course.user_id == *user_id {
        return CourseAccess::Owned(course);
    }
    let subscribed = ctx
        .repos
        .subscriptions
        .find_by_subscriber(user_id)
        .await
        .into_iter()
        .any(|s| s.source_course_id == *course_id);
    if subscribed {
        CourseAccess::Subscribed(course)
    } else {
        // Do not reveal that the course exists
        CourseAccess::Unknown
    }
}

/// Guards the scheduled notification trigger with the shared cron
/// secret.
pub async fn protect_cron_route(req: &HttpRequest, ctx: &AppContext) -> Result<(), ApiError> {
    match parse_bearer_header(req) {
        Some(token) if token == ctx.config.cron_secret => Ok(()),
        _ => Err(ApiError::Unauthorized(
            "Invalid or missing cron secret".to_string(),
        )),
    }
}

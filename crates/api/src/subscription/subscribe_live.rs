use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::subscribe_live::{APIResponse, RequestBody};
use itu_calendar_domain::{extract_token, Course, SharedCalendar, Subscription, ID};
use itu_calendar_infra::{AppContext, SubscriptionInsertError};

pub async fn subscribe_live_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = SubscribeLiveUseCase {
        user_id: user.id,
        token: body.token.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|subscription| HttpResponse::Created().json(APIResponse::new(subscription)))
        .map_err(handle_error)
}

pub fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::MissingToken => {
            ApiError::BadClientData("No share token found in the provided input".into())
        }
        // Unknown and revoked tokens answer identically so a caller
        // cannot probe which tokens once existed.
        UseCaseErrors::InvalidToken => {
            ApiError::NotFound("The share token is not valid".into())
        }
        UseCaseErrors::OwnCourse => {
            ApiError::Conflict("You cannot subscribe to your own course".into())
        }
        UseCaseErrors::AlreadySubscribed => {
            ApiError::Conflict("You are already subscribed to this course".into())
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

/// Resolves a share token to its active share and source course, or
/// to a single undifferentiated failure.
pub async fn resolve_active_share(
    token: &str,
    ctx: &AppContext,
) -> Option<(SharedCalendar, Course)> {
    let share = ctx
        .repos
        .shares
        .find_by_token(token)
        .await
        .filter(|share| share.is_active)?;
    let course = ctx.repos.courses.find(&share.course_id).await?;
    Some((share, course))
}

/// Next free slot at the end of the user's unified course list
pub async fn next_sort_order(user_id: &ID, ctx: &AppContext) -> i64 {
    let owned = ctx.repos.courses.find_by_user(user_id).await;
    let subscriptions = ctx.repos.subscriptions.find_by_subscriber(user_id).await;
    owned
        .iter()
        .map(|c| c.sort_order)
        .chain(subscriptions.iter().map(|s| s.sort_order))
        .max()
        .map(|max| max + 1)
        .unwrap_or(0)
}

#[derive(Debug)]
struct SubscribeLiveUseCase {
    user_id: ID,
    token: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    MissingToken,
    InvalidToken,
    OwnCourse,
    AlreadySubscribed,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubscribeLiveUseCase {
    type Response = Subscription;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "SubscribeLive";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let token = extract_token(&self.token).ok_or(UseCaseErrors::MissingToken)?;
        let (share, course) = resolve_active_share(&token, ctx)
            .await
            .ok_or(UseCaseErrors::InvalidToken)?;
        if course.user_id == self.user_id {
            return Err(UseCaseErrors::OwnCourse);
        }

        let mut subscription = Subscription::new(&self.user_id, &share.id, &course);
        subscription.sort_order = next_sort_order(&self.user_id, ctx).await;

        match ctx.repos.subscriptions.insert(&subscription).await {
            Ok(()) => Ok(subscription),
            Err(SubscriptionInsertError::AlreadySubscribed) => {
                Err(UseCaseErrors::AlreadySubscribed)
            }
            Err(SubscriptionInsertError::Storage) => Err(UseCaseErrors::StorageError),
        }
    }
}

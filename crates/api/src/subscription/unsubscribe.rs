use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::unsubscribe::{APIResponse, PathParams};
use itu_calendar_domain::{Subscription, ID};
use itu_calendar_infra::AppContext;

pub async fn unsubscribe_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UnsubscribeUseCase {
        user_id: user.id,
        subscription_id: path_params.subscription_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|subscription| HttpResponse::Ok().json(APIResponse::new(subscription)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(subscription_id) => ApiError::NotFound(format!(
            "Subscription with id: {} was not found",
            subscription_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct UnsubscribeUseCase {
    user_id: ID,
    subscription_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

/// Removes only the link row. The source course and its events are
/// untouched, and resubscribing with the same token works again.
#[async_trait::async_trait(?Send)]
impl UseCase for UnsubscribeUseCase {
    type Response = Subscription;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "Unsubscribe";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.subscriptions.find(&self.subscription_id).await {
            Some(subscription) if subscription.subscriber_id == self.user_id => ctx
                .repos
                .subscriptions
                .delete(&self.subscription_id)
                .await
                .ok_or(UseCaseErrors::StorageError),
            _ => Err(UseCaseErrors::NotFound(self.subscription_id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itu_calendar_domain::Course;
    use itu_calendar_infra::setup_context;

    #[tokio::test]
    async fn unsubscribing_leaves_the_source_intact() {
        let ctx = setup_context().await;
        let subscriber = ID::default();
        let course = Course::new(&ID::default(), "Algorithms", "#4CAF50");
        ctx.repos.courses.insert(&course).await.unwrap();
        let subscription = Subscription::new(&subscriber, &ID::default(), &course);
        ctx.repos.subscriptions.insert(&subscription).await.unwrap();

        let mut usecase = UnsubscribeUseCase {
            user_id: subscriber.clone(),
            subscription_id: subscription.id,
        };
        usecase.execute(&ctx).await.unwrap();

        assert!(ctx
            .repos
            .subscriptions
            .find_by_subscriber(&subscriber)
            .await
            .is_empty());
        assert!(ctx.repos.courses.find(&course.id).await.is_some());
    }

    #[tokio::test]
    async fn resubscribing_after_unsubscribe_works() {
        let ctx = setup_context().await;
        let subscriber = ID::default();
        let course = Course::new(&ID::default(), "Algorithms", "#4CAF50");
        ctx.repos.courses.insert(&course).await.unwrap();
        let subscription = Subscription::new(&subscriber, &ID::default(), &course);
        ctx.repos.subscriptions.insert(&subscription).await.unwrap();

        let mut usecase = UnsubscribeUseCase {
            user_id: subscriber.clone(),
            subscription_id: subscription.id,
        };
        usecase.execute(&ctx).await.unwrap();

        let again = Subscription::new(&subscriber, &ID::default(), &course);
        assert!(ctx.repos.subscriptions.insert(&again).await.is_ok());
    }
}

use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::update_subscription::{APIResponse, PathParams, RequestBody};
use itu_calendar_domain::{Subscription, ID};
use itu_calendar_infra::AppContext;

pub async fn update_subscription_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateSubscriptionUseCase {
        user_id: user.id,
        subscription_id: path_params.subscription_id.clone(),
        active: body.active,
        sort_order: body.sort_order,
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
struct UpdateSubscriptionUseCase {
    user_id: ID,
    subscription_id: ID,
    active: Option<bool>,
    sort_order: Option<i64>,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

/// The two per-subscriber knobs on a subscribed course. Everything
/// else on the entry belongs to the source owner.
#[async_trait::async_trait(?Send)]
impl UseCase for UpdateSubscriptionUseCase {
    type Response = Subscription;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "UpdateSubscription";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let mut subscription = match ctx.repos.subscriptions.find(&self.subscription_id).await {
            Some(subscription) if subscription.subscriber_id == self.user_id => subscription,
            _ => return Err(UseCaseErrors::NotFound(self.subscription_id.clone())),
        };

        if let Some(active) = self.active {
            subscription.active = active;
        }
        if let Some(sort_order) = self.sort_order {
            subscription.sort_order = sort_order;
        }

        ctx.repos
            .subscriptions
            .save(&subscription)
            .await
            .map(|_| subscription)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

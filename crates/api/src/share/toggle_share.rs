use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::toggle_share::{APIResponse, PathParams, RequestBody};
use itu_calendar_domain::{SharedCalendar, ID};
use itu_calendar_infra::AppContext;

pub async fn toggle_share_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = ToggleShareUseCase {
        user_id: user.id,
        share_id: path_params.share_id.clone(),
        is_active: body.is_active,
    };

    execute(usecase, &ctx)
        .await
        .map(|share| HttpResponse::Ok().json(APIResponse::new(share)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(share_id) => {
            ApiError::NotFound(format!("Share with id: {} was not found", share_id))
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct ToggleShareUseCase {
    user_id: ID,
    share_id: ID,
    is_active: bool,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

/// Deactivating keeps the row and its token so existing feed URLs
/// and subscriber links resume working when the share is re-enabled.
#[async_trait::async_trait(?Send)]
impl UseCase for ToggleShareUseCase {
    type Response = SharedCalendar;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "ToggleShare";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let mut share = match ctx.repos.shares.find(&self.share_id).await {
            Some(share) if share.user_id == self.user_id => share,
            _ => return Err(UseCaseErrors::NotFound(self.share_id.clone())),
        };

        share.is_active = self.is_active;
        ctx.repos
            .shares
            .save(&share)
            .await
            .map(|_| share)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itu_calendar_infra::setup_context;

    #[tokio::test]
    async fn toggle_preserves_the_token() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let share = SharedCalendar::new(&user_id, &ID::default());
        let token = share.share_token.clone();
        ctx.repos.shares.insert(&share).await.unwrap();

        let mut usecase = ToggleShareUseCase {
            user_id: user_id.clone(),
            share_id: share.id.clone(),
            is_active: false,
        };
        let off = usecase.execute(&ctx).await.unwrap();
        assert!(!off.is_active);

        let mut usecase = ToggleShareUseCase {
            user_id,
            share_id: share.id,
            is_active: true,
        };
        let on = usecase.execute(&ctx).await.unwrap();
        assert!(on.is_active);
        assert_eq!(on.share_token, token);
    }

    #[tokio::test]
    async fn strangers_cannot_toggle() {
        let ctx = setup_context().await;
        let share = SharedCalendar::new(&ID::default(), &ID::default());
        ctx.repos.shares.insert(&share).await.unwrap();

        let mut usecase = ToggleShareUseCase {
            user_id: ID::default(),
            share_id: share.id.clone(),
            is_active: false,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::NotFound(_))
        ));
        assert!(ctx.repos.shares.find(&share.id).await.unwrap().is_active);
    }
}

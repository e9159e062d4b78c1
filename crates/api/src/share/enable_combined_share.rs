use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::enable_combined_share::{APIResponse, RequestBody};
use itu_calendar_domain::User;
use itu_calendar_infra::AppContext;
use itu_calendar_utils::create_share_token;

pub async fn enable_combined_share_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = EnableCombinedShareUseCase {
        user,
        regenerate: body.regenerate,
    };

    execute(usecase, &ctx)
        .await
        .map(|combined_share_token| {
            HttpResponse::Ok().json(APIResponse {
                combined_share_token,
            })
        })
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct EnableCombinedShareUseCase {
    user: User,
    regenerate: bool,
}

#[derive(Debug)]
enum UseCaseErrors {
    StorageError,
}

/// Mints the all-courses feed token on first call and hands the same
/// token back afterwards. Regenerating invalidates every previously
/// handed out combined feed URL.
#[async_trait::async_trait(?Send)]
impl UseCase for EnableCombinedShareUseCase {
    type Response = String;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "EnableCombinedShare";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        if !self.regenerate {
            if let Some(token) = &self.user.settings.combined_share_token {
                return Ok(token.clone());
            }
        }

        let token = create_share_token();
        self.user.settings.combined_share_token = Some(token.clone());
        ctx.repos
            .users
            .save(&self.user)
            .await
            .map(|_| token)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

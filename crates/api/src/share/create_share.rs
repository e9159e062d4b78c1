use crate::error::ApiError;
use crate::shared::{
    auth::{protect_route, resolve_course_access, CourseAccess},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::create_share::{APIResponse, PathParams};
use itu_calendar_domain::{SharedCalendar, ID};
use itu_calendar_infra::{AppContext, ShareInsertError};

pub async fn create_share_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateShareUseCase {
        user_id: user.id,
        course_id: path_params.course_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|share| HttpResponse::Created().json(APIResponse::new(share)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::CourseNotFound(course_id) => {
            ApiError::NotFound(format!("Course with id: {} was not found", course_id))
        }
        UseCaseErrors::ReadOnly => {
            ApiError::ReadOnly("Only the owner of a course can share it".into())
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct CreateShareUseCase {
    user_id: ID,
    course_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    CourseNotFound(ID),
    ReadOnly,
    StorageError,
}

/// Get-or-create: sharing an already shared course hands back the
/// existing row with its original token instead of minting a second
/// one.
#[async_trait::async_trait(?Send)]
impl UseCase for CreateShareUseCase {
    type Response = SharedCalendar;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateShare";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        match resolve_course_access(&self.user_id, &self.course_id, ctx).await {
            CourseAccess::Owned(_) => {}
            CourseAccess::Subscribed(_) => return Err(UseCaseErrors::ReadOnly),
            CourseAccess::Unknown => {
                return Err(UseCaseErrors::CourseNotFound(self.course_id.clone()))
            }
        }

        if let Some(existing) = ctx.repos.shares.find_by_course(&self.course_id).await {
            return Ok(existing);
        }

        // A token collision is astronomically unlikely but the store
        // treats it as a hard conflict, so retry with a fresh token.
        for _ in 0..3 {
            let share = SharedCalendar::new(&self.user_id, &self.course_id);
            match ctx.repos.shares.insert(&share).await {
                Ok(()) => return Ok(share),
                Err(ShareInsertError::TokenTaken) => continue,
                Err(ShareInsertError::CourseAlreadyShared) => {
                    return ctx
                        .repos
                        .shares
                        .find_by_course(&self.course_id)
                        .await
                        .ok_or(UseCaseErrors::StorageError);
                }
                Err(ShareInsertError::Storage) => return Err(UseCaseErrors::StorageError),
            }
        }
        Err(UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itu_calendar_domain::{Course, Subscription};
    use itu_calendar_infra::setup_context;

    #[tokio::test]
    async fn sharing_twice_returns_the_same_token() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let course = Course::new(&user_id, "Algorithms", "#4CAF50");
        ctx.repos.courses.insert(&course).await.unwrap();

        let mut usecase = CreateShareUseCase {
            user_id: user_id.clone(),
            course_id: course.id.clone(),
        };
        let first = usecase.execute(&ctx).await.unwrap();

        let mut usecase = CreateShareUseCase {
            user_id,
            course_id: course.id,
        };
        let second = usecase.execute(&ctx).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(first.share_token, second.share_token);
    }

    #[tokio::test]
    async fn only_the_owner_can_share() {
        let ctx = setup_context().await;
        let subscriber = ID::default();
        let course = Course::new(&ID::default(), "Algorithms", "#4CAF50");
        ctx.repos.courses.insert(&course).await.unwrap();
        let subscription = Subscription::new(&subscriber, &ID::default(), &course);
        ctx.repos.subscriptions.insert(&subscription).await.unwrap();

        let mut usecase = CreateShareUseCase {
            user_id: subscriber,
            course_id: course.id.clone(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::ReadOnly)
        ));

        let mut usecase = CreateShareUseCase {
            user_id: ID::default(),
            course_id: course.id,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::CourseNotFound(_))
        ));
    }
}

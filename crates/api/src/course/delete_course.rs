use crate::error::ApiError;
use crate::shared::{
    auth::{protect_route, resolve_course_access, CourseAccess},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::delete_course::{APIResponse, PathParams};
use itu_calendar_domain::{Course, ID};
use itu_calendar_infra::AppContext;

pub async fn delete_course_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteCourseUseCase {
        user_id: user.id,
        course_id: path_params.course_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|course| HttpResponse::Ok().json(APIResponse::new(course)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(course_id) => {
            ApiError::NotFound(format!("Course with id: {} was not found", course_id))
        }
        UseCaseErrors::ReadOnly => {
            ApiError::ReadOnly("Unsubscribe instead of deleting a subscribed course".into())
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct DeleteCourseUseCase {
    user_id: ID,
    course_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    ReadOnly,
    StorageError,
}

/// Deleting a course takes its events, its share row and every
/// subscription pointing at it with it. Subscribers simply see the
/// entry vanish from their list.
#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCourseUseCase {
    type Response = Course;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeleteCourse";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let course = match resolve_course_access(&self.user_id, &self.course_id, ctx).await {
            CourseAccess::Owned(course) => course,
            CourseAccess::Subscribed(_) => return Err(UseCaseErrors::ReadOnly),
            CourseAccess::Unknown => return Err(UseCaseErrors::NotFound(self.course_id.clone())),
        };

        ctx.repos
            .events
            .delete_by_course(&course.id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        ctx.repos.shares.delete_by_course(&course.id).await;
        ctx.repos
            .subscriptions
            .delete_by_source_course(&course.id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        ctx.repos
            .courses
            .delete(&course.id)
            .await
            .ok_or(UseCaseErrors::StorageError)
    }
}

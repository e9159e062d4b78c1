use crate::error::ApiError;
use crate::shared::{
    auth::{protect_route, resolve_course_access, CourseAccess},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::get_share_for_course::{APIResponse, PathParams};
use itu_calendar_domain::{SharedCalendar, ID};
use itu_calendar_infra::AppContext;

pub async fn get_share_for_course_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetShareForCourseUseCase {
        user_id: user.id,
        course_id: path_params.course_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|share| HttpResponse::Ok().json(APIResponse::new(share)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::CourseNotFound(course_id) => {
            ApiError::NotFound(format!("Course with id: {} was not found", course_id))
        }
    }
}

#[derive(Debug)]
struct GetShareForCourseUseCase {
    user_id: ID,
    course_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    CourseNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetShareForCourseUseCase {
    type Response = Option<SharedCalendar>;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetShareForCourse";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        match resolve_course_access(&self.user_id, &self.course_id, ctx).await {
            CourseAccess::Owned(_) => {}
            // Subscribers never see the owner's share row
            CourseAccess::Subscribed(_) | CourseAccess::Unknown => {
                return Err(UseCaseErrors::CourseNotFound(self.course_id.clone()))
            }
        }

        Ok(ctx.repos.shares.find_by_course(&self.course_id).await)
    }
}

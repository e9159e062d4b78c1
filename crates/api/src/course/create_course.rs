use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::create_course::{APIResponse, RequestBody};
use itu_calendar_domain::{Course, ID};
use itu_calendar_infra::AppContext;

pub async fn create_course_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateCourseUseCase {
        user_id: user.id,
        name: body.name.clone(),
        color: body.color.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|course| HttpResponse::Created().json(APIResponse::new(course)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::InvalidName => {
            ApiError::BadClientData("Course name must not be empty".into())
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct CreateCourseUseCase {
    user_id: ID,
    name: String,
    color: String,
}

#[derive(Debug)]
enum UseCaseErrors {
    InvalidName,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCourseUseCase {
    type Response = Course;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateCourse";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        if self.name.trim().is_empty() {
            return Err(UseCaseErrors::InvalidName);
        }

        let existing = ctx.repos.courses.find_by_user(&self.user_id).await;
        let next_order = existing
            .iter()
            .map(|c| c.sort_order)
            .max()
            .map(|max| max + 1)
            .unwrap_or(0);

        let mut course = Course::new(&self.user_id, self.name.trim(), &self.color);
        course.sort_order = next_order;

        ctx.repos
            .courses
            .insert(&course)
            .await
            .map(|_| course)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

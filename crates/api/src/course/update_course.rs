use crate::error::ApiError;
use crate::shared::{
    auth::{protect_route, resolve_course_access, CourseAccess},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::update_course::{APIResponse, PathParams, RequestBody};
use itu_calendar_domain::{Course, ID};
use itu_calendar_infra::AppContext;

pub async fn update_course_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;
    let body = body.into_inner();

    let usecase = UpdateCourseUseCase {
        user_id: user.id,
        course_id: path_params.course_id.clone(),
        name: body.name,
        color: body.color,
        active: body.active,
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
        UseCaseErrors::ReadOnly => ApiError::ReadOnly(
            "Subscribed courses cannot be edited, only their visibility and order".into(),
        ),
        UseCaseErrors::InvalidName => {
            ApiError::BadClientData("Course name must not be empty".into())
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct UpdateCourseUseCase {
    user_id: ID,
    course_id: ID,
    name: Option<String>,
    color: Option<String>,
    active: Option<bool>,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    ReadOnly,
    InvalidName,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCourseUseCase {
    type Response = Course;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "UpdateCourse";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let mut course = match resolve_course_access(&self.user_id, &self.course_id, ctx).await {
            CourseAccess::Owned(course) => course,
            CourseAccess::Subscribed(_) => return Err(UseCaseErrors::ReadOnly),
            CourseAccess::Unknown => return Err(UseCaseErrors::NotFound(self.course_id.clone())),
        };

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(UseCaseErrors::InvalidName);
            }
            course.name = name.trim().to_string();
        }
        if let Some(color) = &self.color {
            course.color = color.clone();
        }
        if let Some(active) = self.active {
            course.active = active;
        }

        ctx.repos
            .courses
            .save(&course)
            .await
            .map(|_| course)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

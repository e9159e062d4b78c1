use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::get_courses::APIResponse;
use itu_calendar_domain::{CourseEntry, ID};
use itu_calendar_infra::AppContext;

pub async fn get_courses_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetCoursesUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|entries| HttpResponse::Ok().json(APIResponse::new(entries)))
        .map_err(|_| ApiError::InternalError)
}

#[derive(Debug)]
pub(crate) struct GetCoursesUseCase {
    pub(crate) user_id: ID,
}

#[derive(Debug)]
pub(crate) enum UseCaseErrors {
    StorageError,
}

/// Merges the user's owned courses with views of the courses they
/// subscribe to into one list. Subscribed entries carry the source's
/// name and color but the subscriber's own active flag and sort
/// order.
#[async_trait::async_trait(?Send)]
impl UseCase for GetCoursesUseCase {
    type Response = Vec<CourseEntry>;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetCourses";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let owned = ctx.repos.courses.find_by_user(&self.user_id).await;
        let subscriptions = ctx.repos.subscriptions.find_by_subscriber(&self.user_id).await;

        let source_ids = subscriptions
            .iter()
            .map(|s| s.source_course_id.clone())
            .collect::<Vec<_>>();
        let sources = ctx.repos.courses.find_many(&source_ids).await;

        let mut entries = owned.into_iter().map(CourseEntry::Owned).collect::<Vec<_>>();
        for subscription in subscriptions {
            // A missing source means the owner deleted the course and
            // the cascade has not reached this link yet; hide it.
            if let Some(course) = sources
                .iter()
                .find(|c| c.id == subscription.source_course_id)
            {
                entries.push(CourseEntry::Subscribed {
                    course: course.clone(),
                    subscription,
                });
            }
        }

        entries.sort_by_key(|e| e.sort_order());
        Ok(entries)
    }
}

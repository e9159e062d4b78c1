use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use itu_calendar_api_structs::get_courses::APIResponse;
use itu_calendar_api_structs::reorder_courses::{CourseOrder, RequestBody};
use itu_calendar_domain::{Course, CourseEntry, Subscription, ID};
use itu_calendar_infra::AppContext;

pub async fn reorder_courses_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = ReorderCoursesUseCase {
        user_id: user.id,
        orders: body.into_inner().orders,
    };

    execute(usecase, &ctx)
        .await
        .map(|entries| HttpResponse::Ok().json(APIResponse::new(entries)))
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::UnknownCourse(course_id) => ApiError::NotFound(format!(
            "Course with id: {} is not in your course list",
            course_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

#[derive(Debug)]
struct ReorderCoursesUseCase {
    user_id: ID,
    orders: Vec<CourseOrder>,
}

#[derive(Debug)]
enum UseCaseErrors {
    UnknownCourse(ID),
    StorageError,
}

enum Target {
    Owned(Course),
    Subscribed(Subscription),
}

/// Applies a batch of sort order changes across owned courses and
/// subscriptions in one go. The whole batch is validated before any
/// row is written so a bad id cannot leave the list half reordered.
#[async_trait::async_trait(?Send)]
impl UseCase for ReorderCoursesUseCase {
    type Response = Vec<CourseEntry>;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "ReorderCourses";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Errors> {
        let owned = ctx.repos.courses.find_by_user(&self.user_id).await;
        let subscriptions = ctx.repos.subscriptions.find_by_subscriber(&self.user_id).await;

        let mut writes = Vec::with_capacity(self.orders.len());
        for order in &self.orders {
            if let Some(course) = owned.iter().find(|c| c.id == order.course_id) {
                let mut course = course.clone();
                course.sort_order = order.sort_order;
                writes.push(Target::Owned(course));
            } else if let Some(subscription) = subscriptions
                .iter()
                .find(|s| s.source_course_id == order.course_id)
            {
                let mut subscription = subscription.clone();
                subscription.sort_order = order.sort_order;
                writes.push(Target::Subscribed(subscription));
            } else {
                return Err(UseCaseErrors::UnknownCourse(order.course_id.clone()));
            }
        }

        for write in &writes {
            let res = match write {
                Target::Owned(course) => ctx.repos.courses.save(course).await,
                Target::Subscribed(subscription) => {
                    ctx.repos.subscriptions.save(subscription).await
                }
            };
            if res.is_err() {
                // Put back the rows written so far
                for original in owned.iter() {
                    let _ = ctx.repos.courses.save(original).await;
                }
                for original in subscriptions.iter() {
                    let _ = ctx.repos.subscriptions.save(original).await;
                }
                return Err(UseCaseErrors::StorageError);
            }
        }

        let mut usecase = super::get_courses::GetCoursesUseCase {
            user_id: self.user_id.clone(),
        };
        usecase
            .execute(ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

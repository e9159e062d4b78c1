mod inmemory;

pub use inmemory::InMemoryCourseRepo;
use itu_calendar_domain::{Course, ID};

#[async_trait::async_trait]
pub trait ICourseRepo: Send + Sync {
    async fn insert(&self, course: &Course) -> anyhow::Result<()>;
    async fn save(&self, course: &Course) -> anyhow::Result<()>;
    async fn find(&self, course_id: &ID) -> Option<Course>;
    async fn find_many(&self, course_ids: &[ID]) -> Vec<Course>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Course>;
    async fn delete(&self, course_id: &ID) -> Option<Course>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use itu_calendar_domain::{Course, ID};

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let course = Course::new(&user_id, "Algorithms", "#4CAF50");

        assert!(ctx.repos.courses.insert(&course).await.is_ok());

        let res = ctx.repos.courses.find(&course.id).await.unwrap();
        assert_eq!(res.id, course.id);
        let res = ctx.repos.courses.find_by_user(&user_id).await;
        assert_eq!(res[0].id, course.id);

        let res = ctx.repos.courses.delete(&course.id).await;
        assert!(res.is_some());
        assert!(ctx.repos.courses.find(&course.id).await.is_none());
    }

    #[tokio::test]
    async fn update() {
        let ctx = setup_context().await;
        let mut course = Course::new(&ID::default(), "Algorithms", "#4CAF50");
        ctx.repos.courses.insert(&course).await.unwrap();

        course.name = "Algorithms and Data Structures".to_string();
        course.sort_order = 2;
        assert!(ctx.repos.courses.save(&course).await.is_ok());

        let found = ctx.repos.courses.find(&course.id).await.unwrap();
        assert_eq!(found.name, "Algorithms and Data Structures");
        assert_eq!(found.sort_order, 2);
    }

    #[tokio::test]
    async fn find_many_skips_unknown_ids() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let c1 = Course::new(&user_id, "A", "#111111");
        let c2 = Course::new(&user_id, "B", "#222222");
        ctx.repos.courses.insert(&c1).await.unwrap();
        ctx.repos.courses.insert(&c2).await.unwrap();

        let found = ctx
            .repos
            .courses
            .find_many(&[c1.id.clone(), ID::new()])
            .await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, c1.id);
    }
}

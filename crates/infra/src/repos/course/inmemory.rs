use super::ICourseRepo;
use crate::repos::shared::inmemory_repo::*;
use itu_calendar_domain::{Course, ID};
use std::sync::Mutex;

pub struct InMemoryCourseRepo {
    courses: Mutex<Vec<Course>>,
}

impl InMemoryCourseRepo {
    pub fn new() -> Self {
        Self {
            courses: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICourseRepo for InMemoryCourseRepo {
    async fn insert(&self, course: &Course) -> anyhow::Result<()> {
        insert(course, &self.courses);
        Ok(())
    }

    async fn save(&self, course: &Course) -> anyhow::Result<()> {
        save(course, &self.courses);
        Ok(())
    }

    async fn find(&self, course_id: &ID) -> Option<Course> {
        find(course_id, &self.courses)
    }

    async fn find_many(&self, course_ids: &[ID]) -> Vec<Course> {
        find_by(&self.courses, |c: &Course| course_ids.contains(&c.id))
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Course> {
        find_by(&self.courses, |c: &Course| c.user_id == *user_id)
    }

    async fn delete(&self, course_id: &ID) -> Option<Course> {
        delete(course_id, &self.courses)
    }
}

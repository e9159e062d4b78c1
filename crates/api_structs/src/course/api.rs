use serde::{Deserialize, Serialize};

use crate::dtos::CourseDTO;
use itu_calendar_domain::{Course, CourseEntry, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub course: CourseDTO,
}

impl CourseResponse {
    pub fn new(course: Course) -> Self {
        Self {
            course: CourseDTO::from_owned(course),
        }
    }
}

pub mod create_course {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub color: String,
    }

    pub type APIResponse = CourseResponse;
}

pub mod update_course {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub course_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub color: Option<String>,
        pub active: Option<bool>,
    }

    pub type APIResponse = CourseResponse;
}

pub mod delete_course {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub course_id: ID,
    }

    pub type APIResponse = CourseResponse;
}

pub mod get_courses {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub courses: Vec<CourseDTO>,
    }

    impl APIResponse {
        pub fn new(entries: Vec<CourseEntry>) -> Self {
            Self {
                courses: entries.into_iter().map(CourseDTO::new).collect(),
            }
        }
    }
}

pub mod reorder_courses {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CourseOrder {
        pub course_id: ID,
        pub sort_order: i64,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub orders: Vec<CourseOrder>,
    }

    pub use super::get_courses::APIResponse;
}

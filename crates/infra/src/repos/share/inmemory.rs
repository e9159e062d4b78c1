use super::{IShareRepo, ShareInsertError};
use crate::repos::shared::inmemory_repo::*;
use itu_calendar_domain::{SharedCalendar, ID};
use std::sync::Mutex;

pub struct InMemoryShareRepo {
    shares: Mutex<Vec<SharedCalendar>>,
}

impl InMemoryShareRepo {
    pub fn new() -> Self {
        Self {
            shares: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IShareRepo for InMemoryShareRepo {
    async fn insert(&self, share: &SharedCalendar) -> Result<(), ShareInsertError> {
        {
            let shares = self.shares.lock().unwrap();
            if shares.iter().any(|s| s.course_id == share.course_id) {
                return Err(ShareInsertError::CourseAlreadyShared);
            }
            if shares.iter().any(|s| s.share_token == share.share_token) {
                return Err(ShareInsertError::TokenTaken);
            }
        }
        insert(share, &self.shares);
        Ok(())
    }

    async fn save(&self, share: &SharedCalendar) -> anyhow::Result<()> {
        save(share, &self.shares);
        Ok(())
    }

    async fn find(&self, share_id: &ID) -> Option<SharedCalendar> {
        find(share_id, &self.shares)
    }

    async fn find_by_course(&self, course_id: &ID) -> Option<SharedCalendar> {
        find_by(&self.shares, |s: &SharedCalendar| s.course_id == *course_id)
            .into_iter()
            .next()
    }

    async fn find_by_token(&self, token: &str) -> Option<SharedCalendar> {
        find_by(&self.shares, |s: &SharedCalendar| s.share_token == token)
            .into_iter()
            .next()
    }

    async fn delete_by_course(&self, course_id: &ID) -> Option<SharedCalendar> {
        find_and_delete_by(&self.shares, |s: &SharedCalendar| {
            s.course_id == *course_id
        })
        .into_iter()
        .next()
    }
}

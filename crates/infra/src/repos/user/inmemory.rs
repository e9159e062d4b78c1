use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use itu_calendar_domain::{User, ID};
use std::sync::Mutex;

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        save(user, &self.users);
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_by_session_token(&self, session_token: &str) -> Option<User> {
        find_by(&self.users, |u: &User| u.session_token == session_token)
            .into_iter()
            .next()
    }

    async fn find_by_combined_share_token(&self, token: &str) -> Option<User> {
        find_by(&self.users, |u: &User| {
            u.settings.combined_share_token.as_deref() == Some(token)
        })
        .into_iter()
        .next()
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        delete(user_id, &self.users)
    }
}

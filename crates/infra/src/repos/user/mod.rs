mod inmemory;

pub use inmemory::InMemoryUserRepo;
use itu_calendar_domain::{User, ID};

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_by_session_token(&self, session_token: &str) -> Option<User>;
    async fn find_by_combined_share_token(&self, token: &str) -> Option<User>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use itu_calendar_domain::User;

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = setup_context().await;
        let user = User::new("a@itu.dk", "session-a");

        assert!(ctx.repos.users.insert(&user).await.is_ok());
        let res = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(res.id, user.id);

        let res = ctx.repos.users.delete(&user.id).await;
        assert!(res.is_some());
        assert!(ctx.repos.users.find(&user.id).await.is_none());
    }

    #[tokio::test]
    async fn finds_by_session_and_combined_token() {
        let ctx = setup_context().await;
        let mut user = User::new("a@itu.dk", "session-a");
        user.settings.combined_share_token = Some("combined-token".to_string());
        ctx.repos.users.insert(&user).await.unwrap();

        let by_session = ctx.repos.users.find_by_session_token("session-a").await;
        assert_eq!(by_session.unwrap().id, user.id);
        assert!(ctx.repos.users.find_by_session_token("nope").await.is_none());

        let by_token = ctx
            .repos
            .users
            .find_by_combined_share_token("combined-token")
            .await;
        assert_eq!(by_token.unwrap().id, user.id);
        assert!(ctx
            .repos
            .users
            .find_by_combined_share_token("unknown")
            .await
            .is_none());
    }
}

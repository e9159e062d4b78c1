use crate::shared::entity::{Entity, ID};

/// An authenticated account holder. Authentication itself lives
/// outside this core; the opaque `session_token` is what the auth
/// guard resolves incoming bearer credentials against.
#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub session_token: String,
    pub settings: UserSettings,
}

#[derive(Debug, Clone, Default)]
pub struct UserSettings {
    /// Token granting anonymous read access to the union of this
    /// user's owned + subscribed courses. Minted on demand, rotated
    /// only by an explicit regenerate action.
    pub combined_share_token: Option<String>,
}

impl User {
    pub fn new(email: &str, session_token: &str) -> Self {
        Self {
            id: Default::default(),
            email: email.to_string(),
            session_token: session_token.to_string(),
            settings: Default::default(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

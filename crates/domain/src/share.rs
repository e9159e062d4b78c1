use crate::shared::entity::{Entity, ID};
use itu_calendar_utils::create_share_token;
use url::Url;

/// A revocable grant of anonymous read access to one course's
/// events. The token is minted once and survives activate/deactivate
/// cycles, so a re-enabled share keeps its old feed URL.
#[derive(Debug, Clone)]
pub struct SharedCalendar {
    pub id: ID,
    pub user_id: ID,
    pub course_id: ID,
    pub share_token: String,
    pub is_active: bool,
}

impl SharedCalendar {
    pub fn new(user_id: &ID, course_id: &ID) -> Self {
        Self {
            id: Default::default(),
            user_id: user_id.clone(),
            course_id: course_id.clone(),
            share_token: create_share_token(),
            is_active: true,
        }
    }
}

impl Entity for SharedCalendar {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Accepts either a bare share token or a full feed/subscribe URL
/// containing `?token=...` / `&token=...` and returns the token
/// value identically either way.
pub fn extract_token(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(url) = Url::parse(input) {
        return url
            .query_pairs()
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.to_string())
            .filter(|token| !token.is_empty());
    }
    Some(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_token_passes_through() {
        let share = SharedCalendar::new(&ID::new(), &ID::new());
        assert_eq!(
            extract_token(&share.share_token),
            Some(share.share_token.clone())
        );
    }

    #[test]
    fn token_is_pulled_out_of_urls() {
        let url = "https://cal.example.com/feeds/course?token=abc123";
        assert_eq!(extract_token(url), Some("abc123".to_string()));

        let url_with_more_params = "https://cal.example.com/feeds/course?foo=1&token=xyz&bar=2";
        assert_eq!(extract_token(url_with_more_params), Some("xyz".to_string()));
    }

    #[test]
    fn missing_or_empty_tokens_are_none() {
        assert_eq!(extract_token(""), None);
        assert_eq!(extract_token("   "), None);
        assert_eq!(extract_token("https://cal.example.com/feeds/course"), None);
        assert_eq!(
            extract_token("https://cal.example.com/feeds/course?token="),
            None
        );
    }

    #[test]
    fn url_and_bare_forms_extract_identically() {
        let token = create_share_token();
        let url = format!("https://cal.example.com/subscribe?token={}", token);
        assert_eq!(extract_token(&token), extract_token(&url));
    }
}

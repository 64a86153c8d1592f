// Users list: one page of users, a search box and pagination
use super::{edit_path, users_path, Effect, LOGIN_PATH};
use crate::api::ApiError;
use crate::auth::TokenStore;
use crate::types::{User, UserId, UserPage};

pub const FIRST_PAGE: u32 = 1;

pub const FETCH_FAILED: &str = "Failed to fetch users.";
pub const DELETE_FAILED: &str = "Failed to delete user.";
pub const DELETED: &str = "User deleted successfully.";

/// Reads the `page` query value the way a browser `parseInt` would, using the
/// leading digits. Anything unusable, including zero, means the first page;
/// values past `u32::MAX` clamp to the last addressable page.
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return FIRST_PAGE;
    };

    let digits: String = raw
        .trim_start()
        .trim_start_matches('+')
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return FIRST_PAGE;
    }

    // Only overflow can fail here, every character is a digit.
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Users on the loaded page matching `query`; an empty query keeps them all.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let query = query.to_lowercase();
    users.iter().filter(|u| u.matches(&query)).cloned().collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsersList {
    page: u32,
    users: Vec<User>,
    query: String,
    has_more: bool,
}

impl Default for UsersList {
    fn default() -> Self {
        Self::new(FIRST_PAGE)
    }
}

impl UsersList {
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
            users: Vec::new(),
            query: String::new(),
            has_more: true,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Moves to the page named by the URL. The loaded users stay until the
    /// next fetch lands.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(FIRST_PAGE);
    }

    /// Redirect to login when there is no session; `None` means go ahead and fetch.
    pub fn guard(&self, tokens: &dyn TokenStore) -> Option<Effect> {
        if tokens.has_session() {
            None
        } else {
            Some(Effect::Navigate(LOGIN_PATH.to_string()))
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn visible(&self) -> Vec<User> {
        filter_users(&self.users, &self.query)
    }

    pub fn can_go_back(&self) -> bool {
        self.page > FIRST_PAGE
    }

    pub fn can_go_forward(&self) -> bool {
        self.has_more && self.page < u32::MAX
    }

    pub fn previous_page(&self) -> Option<Effect> {
        self.can_go_back()
            .then(|| Effect::Navigate(users_path(self.page - 1)))
    }

    pub fn next_page(&self) -> Option<Effect> {
        if !self.has_more {
            return None;
        }
        self.page
            .checked_add(1)
            .map(|next| Effect::Navigate(users_path(next)))
    }

    pub fn edit(&self, id: UserId) -> Effect {
        Effect::Navigate(edit_path(id))
    }

    pub fn apply_fetch(&mut self, result: Result<UserPage, ApiError>) -> Vec<Effect> {
        match result {
            Ok(page) => {
                self.has_more = !page.data.is_empty();
                self.users = page.data;
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(page = self.page, error = %err, "failed to fetch users");
                vec![Effect::Alert(FETCH_FAILED.to_string())]
            }
        }
    }

    pub fn apply_delete(&mut self, id: UserId, result: Result<(), ApiError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                tracing::info!(id, "user deleted");
                vec![Effect::Alert(DELETED.to_string()), Effect::Reload]
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to delete user");
                vec![Effect::Alert(DELETE_FAILED.to_string())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;

    fn user(id: UserId, first: &str, last: &str, email: &str) -> User {
        User {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id),
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "George", "Bluth", "george.bluth@reqres.in"),
            user(2, "Janet", "Weaver", "janet.weaver@reqres.in"),
            user(3, "Emma", "Wong", "emma.wong@reqres.in"),
        ]
    }

    fn loaded(page: u32) -> UsersList {
        let mut list = UsersList::new(page);
        list.apply_fetch(Ok(UserPage::from_users(page, sample())));
        list
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("2")), 2);
        assert_eq!(parse_page(Some("3abc")), 3);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-2")), 1);
        assert_eq!(parse_page(Some(" 4")), 4);
        assert_eq!(parse_page(Some("007")), 7);
        assert_eq!(parse_page(Some("000")), 1);
    }

    #[test]
    fn test_parse_page_clamps_huge_values() {
        assert_eq!(parse_page(Some("4294967295")), u32::MAX);
        assert_eq!(parse_page(Some("99999999999")), u32::MAX);
        assert_eq!(parse_page(Some("99999999999xyz")), u32::MAX);
    }

    #[test]
    fn test_next_stops_at_last_addressable_page() {
        let mut list = UsersList::new(parse_page(Some("4294967295")));
        list.apply_fetch(Err(ApiError::Http(500)));

        assert!(!list.can_go_forward());
        assert_eq!(list.next_page(), None);
        assert_eq!(
            list.previous_page(),
            Some(Effect::Navigate(format!("/users?page={}", u32::MAX - 1)))
        );
    }

    #[test]
    fn test_next_stays_enabled_after_failed_fetch() {
        let mut list = UsersList::new(5);
        list.apply_fetch(Err(ApiError::Network("offline".to_string())));
        assert_eq!(list.next_page(), Some(Effect::Navigate("/users?page=6".to_string())));
    }

    #[test]
    fn test_guard_redirects_without_token() {
        let list = UsersList::new(1);
        assert_eq!(
            list.guard(&MemoryTokenStore::default()),
            Some(Effect::Navigate("/login".to_string()))
        );
        assert_eq!(list.guard(&MemoryTokenStore::with_token("")), Some(Effect::Navigate("/login".to_string())));
        assert_eq!(list.guard(&MemoryTokenStore::with_token("QpwL5tke4Pnpja7X4")), None);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut list = loaded(1);

        list.set_query("JANET".to_string());
        assert_eq!(list.visible().iter().map(|u| u.id).collect::<Vec<_>>(), vec![2]);

        list.set_query("wong".to_string());
        assert_eq!(list.visible().iter().map(|u| u.id).collect::<Vec<_>>(), vec![3]);

        list.set_query("Bluth@".to_string());
        assert_eq!(list.visible().iter().map(|u| u.id).collect::<Vec<_>>(), vec![1]);

        list.set_query("@reqres".to_string());
        assert_eq!(list.visible().len(), 3);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let mut list = loaded(1);
        list.set_query("zzz".to_string());
        assert!(list.visible().is_empty());

        list.set_query(String::new());
        assert_eq!(list.visible().len(), 3);
    }

    #[test]
    fn test_search_only_covers_loaded_page() {
        let mut list = loaded(1);
        list.set_query("Lawson".to_string());
        assert!(list.visible().is_empty());
    }

    #[test]
    fn test_search_reapplies_to_new_page() {
        let mut list = loaded(1);
        list.set_query("lawson".to_string());
        list.set_page(2);
        list.apply_fetch(Ok(UserPage::from_users(
            2,
            vec![user(7, "Michael", "Lawson", "michael.lawson@reqres.in")],
        )));
        assert_eq!(list.visible().len(), 1);
    }

    #[test]
    fn test_previous_disabled_only_on_first_page() {
        let list = loaded(1);
        assert!(!list.can_go_back());
        assert_eq!(list.previous_page(), None);

        let list = loaded(2);
        assert!(list.can_go_back());
        assert_eq!(list.previous_page(), Some(Effect::Navigate("/users?page=1".to_string())));
    }

    #[test]
    fn test_next_disabled_only_after_empty_fetch() {
        let mut list = UsersList::new(2);
        assert!(list.can_go_forward());

        list.apply_fetch(Ok(UserPage::from_users(2, sample())));
        assert!(list.can_go_forward());
        assert_eq!(list.next_page(), Some(Effect::Navigate("/users?page=3".to_string())));

        list.set_page(3);
        list.apply_fetch(Ok(UserPage::from_users(3, Vec::new())));
        assert!(!list.can_go_forward());
        assert_eq!(list.next_page(), None);
    }

    #[test]
    fn test_failed_fetch_alerts_and_keeps_state() {
        let mut list = loaded(1);
        list.set_query("janet".to_string());
        let before = list.clone();

        let effects = list.apply_fetch(Err(ApiError::Http(500)));
        assert_eq!(effects, vec![Effect::Alert("Failed to fetch users.".to_string())]);
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_outcomes() {
        let mut list = loaded(1);

        assert_eq!(
            list.apply_delete(2, Ok(())),
            vec![Effect::Alert("User deleted successfully.".to_string()), Effect::Reload]
        );

        let before = list.clone();
        assert_eq!(
            list.apply_delete(2, Err(ApiError::Network("offline".to_string()))),
            vec![Effect::Alert("Failed to delete user.".to_string())]
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_edit_navigates_to_form() {
        let list = loaded(1);
        assert_eq!(list.edit(2), Effect::Navigate("/users/edit/2".to_string()));
    }
}

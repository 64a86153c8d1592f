// Edit form for a single user
use super::{users_path, Effect};
use crate::api::ApiError;
use crate::types::{DraftField, UpdatedUser, User, UserDraft, UserId};

pub const LOAD_FAILED: &str = "Failed to fetch user details.";
pub const UPDATE_FAILED: &str = "Failed to update user.";
pub const UPDATED: &str = "User updated successfully.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditUser {
    id: Option<UserId>,
    draft: UserDraft,
    loading: bool,
    error: Option<String>,
}

impl EditUser {
    /// `id` is `None` when the route parameter was not a valid identifier.
    pub fn new(id: Option<UserId>) -> Self {
        Self {
            id,
            draft: UserDraft::default(),
            loading: false,
            error: None,
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts the initial fetch. Returns the id to fetch, or records the
    /// failure straight away when there is nothing valid to fetch.
    pub fn begin_load(&mut self) -> Option<UserId> {
        match self.id {
            Some(id) => {
                self.loading = true;
                Some(id)
            }
            None => {
                self.error = Some(LOAD_FAILED.to_string());
                None
            }
        }
    }

    pub fn apply_loaded(&mut self, result: Result<User, ApiError>) {
        self.loading = false;
        match result {
            Ok(user) => self.draft = UserDraft::from(&user),
            Err(err) => {
                tracing::warn!(id = ?self.id, error = %err, "failed to fetch user");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    /// Returns what to send, or `None` while a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<(UserId, UserDraft)> {
        if self.loading {
            return None;
        }
        let id = self.id?;
        self.loading = true;
        Some((id, self.draft.clone()))
    }

    pub fn apply_submitted(&mut self, result: Result<UpdatedUser, ApiError>) -> Vec<Effect> {
        match result {
            Ok(updated) => {
                tracing::info!(id = ?self.id, updated_at = ?updated.updated_at, "user updated");
                vec![
                    Effect::Alert(UPDATED.to_string()),
                    Effect::Navigate(users_path(super::list::FIRST_PAGE)),
                ]
            }
            Err(err) => {
                tracing::warn!(id = ?self.id, error = %err, "failed to update user");
                self.loading = false;
                vec![Effect::Alert(UPDATE_FAILED.to_string())]
            }
        }
    }
}

// Shared type definitions for the remote user directory
use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
pub type UserId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match on first name, last name or email.
    /// `lower_query` must already be lowercased.
    pub fn matches(&self, lower_query: &str) -> bool {
        self.first_name.to_lowercase().contains(lower_query)
            || self.last_name.to_lowercase().contains(lower_query)
            || self.email.to_lowercase().contains(lower_query)
    }
}

/// The editable subset of a user, sent as a full replacement on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Field of a [`UserDraft`] bound to a form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
}

impl UserDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::FirstName => self.first_name = value,
            DraftField::LastName => self.last_name = value,
            DraftField::Email => self.email = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
        }
    }
}

// Response envelopes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub total_pages: u32,
    pub data: Vec<User>,
}

impl UserPage {
    pub fn from_users(page: u32, data: Vec<User>) -> Self {
        Self {
            page,
            per_page: data.len() as u32,
            total: 0,
            total_pages: 0,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleUser {
    pub data: User,
}

/// Echo returned by `PUT /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedUser {
    #[serde(flatten)]
    pub draft: UserDraft,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

// Request types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body the API returns alongside 4xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

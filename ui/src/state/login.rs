// Sign-in form
use super::{users_path, Effect};
use crate::api::ApiError;
use crate::auth::TokenStore;
use crate::types::{Credentials, LoginResponse};

pub const LOGIN_FAILED: &str = "Login failed.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    loading: bool,
    error: Option<String>,
}

impl LoginForm {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Stores the token on success and heads for the first page of users.
    pub fn apply_login(
        &mut self,
        result: Result<LoginResponse, ApiError>,
        tokens: &dyn TokenStore,
    ) -> Vec<Effect> {
        self.loading = false;
        match result {
            Ok(LoginResponse { token }) if !token.is_empty() => {
                tokens.store(&token);
                tracing::info!(email = %self.email, "signed in");
                vec![Effect::Navigate(users_path(super::list::FIRST_PAGE))]
            }
            Ok(_) => {
                self.error = Some(LOGIN_FAILED.to_string());
                Vec::new()
            }
            Err(ApiError::Rejected(message)) => {
                self.error = Some(message);
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "login request failed");
                self.error = Some(LOGIN_FAILED.to_string());
                Vec::new()
            }
        }
    }
}

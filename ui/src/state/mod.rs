//! View state for the console.
//!
//! Each view keeps its data in a plain struct whose transitions are
//! synchronous and return the [`Effect`]s the page component has to carry out.
//! Network calls happen in the components; their results are fed back in
//! through the `apply_*` methods.

pub mod edit;
pub mod list;
pub mod login;

pub use edit::EditUser;
pub use list::UsersList;
pub use login::LoginForm;

use crate::types::UserId;

pub const LOGIN_PATH: &str = "/login";

pub fn users_path(page: u32) -> String {
    format!("/users?page={}", page)
}

pub fn edit_path(id: UserId) -> String {
    format!("/users/edit/{}", id)
}

/// Something a transition asks the view to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blocking message for the user.
    Alert(String),
    Navigate(String),
    /// Fetch the current page again.
    Reload,
}

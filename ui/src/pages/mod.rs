// Page components
use leptos::*;
use leptos_router::*;
use crate::state::LOGIN_PATH;

pub mod auth;
pub mod users;

pub use auth::*;
pub use users::*;

/// Navigation without options, in the shape [`crate::utils::run_effects`] takes.
pub(crate) fn navigator() -> impl Fn(&str) + Clone + 'static {
    let navigate = use_navigate();
    move |path: &str| navigate(path, Default::default())
}

/// Unknown paths go to the sign-in form.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <Redirect path=LOGIN_PATH/> }
}

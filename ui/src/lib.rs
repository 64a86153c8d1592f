// userdesk UI - user management console for a remote REST directory
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod telemetry;
pub mod types;
pub mod utils;

use api::ApiClient;
use auth::{init_auth, provide_auth_context, BrowserTokenStore};
use components::layout::Layout;
use config::ApiConfig;
use pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    provide_context(ApiClient::new(&config));
    let auth = provide_auth_context(Rc::new(BrowserTokenStore::new(config.token_key.clone())));

    // Storage only exists in the browser, so restore the session after hydration.
    create_effect(move |_| init_auth(&auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/userdesk.css"/>
        <Title text="userdesk - User Management"/>
        <Meta name="description" content="Browse, search and edit users"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        <Router>
            <Layout>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/users" view=UsersListPage/>
                    <Route path="/users/edit/:id" view=EditUserPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Layout>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    telemetry::init_browser_tracing();
    tracing::info!("hydrating userdesk");
    leptos::mount_to_body(App);
}

// userdesk host: server-renders the console and serves its browser bundle
use axum::{extract::FromRef, response::Json, routing::get, Router};
use leptos::LeptosOptions;
use leptos_axum::{generate_route_list, LeptosRoutes};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use userdesk_ui::App;

pub mod config;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub config: Config,
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "userdesk-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn create_router(state: AppState) -> Router {
    let site_root = state.leptos_options.site_root.to_string();
    let pkg_dir = format!("{}/{}", site_root, state.leptos_options.site_pkg_dir);
    let routes = generate_route_list(App);

    Router::new()
        .route("/health", get(health_check))
        .leptos_routes(&state, routes, App)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(site_root))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

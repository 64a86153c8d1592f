use axum::http::StatusCode;
use axum_test::TestServer;
use leptos::LeptosOptions;
use userdesk_server::{config::Config, create_router, AppState};

fn test_server() -> TestServer {
    let state = AppState {
        leptos_options: LeptosOptions::builder().output_name("userdesk").build(),
        config: Config::default(),
    };
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "userdesk-server");
}

#[tokio::test]
async fn test_login_page_is_server_rendered() {
    let server = test_server();

    let response = server.get("/login").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Sign in"));
}

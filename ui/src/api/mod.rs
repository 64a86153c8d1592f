// API client for the remote user directory
use crate::config::ApiConfig;
use crate::types::*;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(not(feature = "ssr"))]
use gloo_net::http::Request;

/// Operations the views need from the remote user directory.
#[async_trait(?Send)]
pub trait UserDirectory {
    async fn list_users(&self, page: u32) -> Result<UserPage, ApiError>;
    async fn get_user(&self, id: UserId) -> Result<User, ApiError>;
    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<UpdatedUser, ApiError>;
    async fn delete_user(&self, id: UserId) -> Result<(), ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: Option<String>,
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            #[cfg(feature = "ssr")]
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Headers sent with every request; JSON bodies also declare their type.
    fn headers(&self, has_body: bool) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if let Some(key) = &self.api_key {
            headers.push(("x-api-key", key.clone()));
        }
        if has_body {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        headers
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(Method::Get, path, None).await?;
        decode(&body)
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let body = self.send(Method::Put, path, Some(json)).await?;
        decode(&body)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let body = self.send(Method::Post, path, Some(json)).await?;
        decode(&body)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    /// Sends one request and returns the body of a successful response.
    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<String, ApiError> {
        let url = self.url(path);
        tracing::debug!(?method, %url, "api request");

        #[cfg(feature = "ssr")]
        {
            let method = match method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };
            let mut builder = self.client.request(method, &url);
            for (name, value) in self.headers(body.is_some()) {
                builder = builder.header(name, value);
            }
            if let Some(json) = body {
                builder = builder.body(json);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status().as_u16();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))?;

            check_status(status, text)
        }

        #[cfg(not(feature = "ssr"))]
        {
            let builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            let builder = self
                .headers(body.is_some())
                .into_iter()
                .fold(builder, |builder, (name, value)| builder.header(name, &value));

            let response = match body {
                Some(json) => builder
                    .body(json)
                    .map_err(|e| ApiError::Serialization(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))?;

            check_status(status, text)
        }
    }
}

#[async_trait(?Send)]
impl UserDirectory for ApiClient {
    async fn list_users(&self, page: u32) -> Result<UserPage, ApiError> {
        self.get(&format!("/users?page={}", page)).await
    }

    async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        let single: SingleUser = self.get(&format!("/users/{}", id)).await?;
        Ok(single.data)
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<UpdatedUser, ApiError> {
        self.put(&format!("/users/{}", id), draft).await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", id)).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post("/login", credentials).await
    }
}

/// Maps a non-2xx status to an error, preferring the API's own message.
fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(err) if !err.error.is_empty() => Err(ApiError::Rejected(err.error)),
        _ => Err(ApiError::Http(status)),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

// Error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("deserialization error: {0}")]
    Deserialization(String),
    #[error("rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes_body_through() {
        assert_eq!(check_status(200, "{}".to_string()), Ok("{}".to_string()));
        assert_eq!(check_status(204, String::new()), Ok(String::new()));
    }

    #[test]
    fn test_error_body_becomes_rejection() {
        let result = check_status(400, r#"{"error":"Missing password"}"#.to_string());
        assert_eq!(result, Err(ApiError::Rejected("Missing password".to_string())));
    }

    #[test]
    fn test_bare_status_becomes_http_error() {
        assert_eq!(check_status(404, "{}".to_string()), Err(ApiError::Http(404)));
        assert_eq!(check_status(500, "<html>".to_string()), Err(ApiError::Http(500)));
    }

    #[test]
    fn test_decode_reports_malformed_json() {
        let result: Result<UserPage, _> = decode("not json");
        assert!(matches!(result, Err(ApiError::Deserialization(_))));
    }

    #[test]
    fn test_configured_api_key_is_sent() {
        let config = ApiConfig::from_values(None, Some("reqres-free-v1"));
        let client = ApiClient::new(&config);

        assert_eq!(client.headers(false), vec![("x-api-key", "reqres-free-v1".to_string())]);
        assert_eq!(
            client.headers(true),
            vec![
                ("x-api-key", "reqres-free-v1".to_string()),
                ("Content-Type", "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_api_key_header_by_default() {
        let client = ApiClient::new(&ApiConfig::default());
        assert!(client.headers(false).is_empty());
        assert_eq!(client.headers(true), vec![("Content-Type", "application/json".to_string())]);
    }

    #[test]
    fn test_urls_join_base_and_path() {
        let client = ApiClient::new(&ApiConfig::default());
        assert_eq!(client.url("/users?page=2"), "https://reqres.in/api/users?page=2");
    }
}

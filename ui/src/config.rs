// Client configuration, resolved when the bundle is built
pub const DEFAULT_API_URL: &str = "https://reqres.in/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Local storage key holding the session token.
    pub token_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl ApiConfig {
    /// Reads `USERDESK_API_URL` and `USERDESK_API_KEY` from the build
    /// environment. The bundle runs in a browser, so there is no runtime env.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("USERDESK_API_URL"), option_env!("USERDESK_API_KEY"))
    }

    pub fn from_values(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url,
            api_key: api_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
            ..Default::default()
        }
    }
}

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::errors::ClientError;
use crate::models::ApiResponse;
use std::time::Duration;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_RESULTS: i64 = 10;

/// Longest error body kept in `ClientError::HttpStatus`, in characters.
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Parameters of one page request.
///
/// Values are sent as-is; zero or negative numbers are left for the service to interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    /// 1-based page index.
    pub page: i64,
    /// Number of users per page.
    pub results: i64,
    /// Generation seed. Pages only line up across calls when the seed is fixed.
    pub seed: Option<String>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_RESULTS)
    }
}

impl UserQuery {
    pub fn new(page: i64, results: i64) -> Self {
        Self {
            page,
            results,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }
}

/// Client for the random user generation service.
///
/// Holds no per-request state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    client: reqwest::Client,
    base_url: String,
}

impl RandomUserClient {
    /// Creates a client for `base_url` with no explicit request timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Endpoint the query string is appended to, e.g. `https://randomuser.me/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::build(base_url.into(), None)
    }

    /// Creates a client from the loaded configuration, applying its timeout if any.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::build(config.base_url.clone(), config.request_timeout)
    }

    /// Creates a client for the public service endpoint.
    pub fn default_endpoint() -> Result<Self, ClientError> {
        Self::new(DEFAULT_BASE_URL)
    }

    fn build(base_url: String, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            ClientError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `<base>?page=<page>&results=<results>`, plus `&seed=<seed>` when a seed is set.
    pub fn request_url(&self, query: &UserQuery) -> String {
        let mut url = format!(
            "{}?page={}&results={}",
            self.base_url, query.page, query.results
        );
        if let Some(ref seed) = query.seed {
            let encoded: String = url::form_urlencoded::byte_serialize(seed.as_bytes()).collect();
            url.push_str("&seed=");
            url.push_str(&encoded);
        }
        url
    }

    /// Fetches one page of users.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page index.
    /// * `results` - Number of users to request.
    ///
    /// # Returns
    ///
    /// * `Result<ApiResponse, ClientError>` - The decoded page, or which step failed.
    pub async fn fetch_users(&self, page: i64, results: i64) -> Result<ApiResponse, ClientError> {
        self.fetch(&UserQuery::new(page, results)).await
    }

    /// Fetches the page described by `query`.
    ///
    /// Non-2xx responses are rejected before the body is decoded.
    pub async fn fetch(&self, query: &UserQuery) -> Result<ApiResponse, ClientError> {
        let url = self.request_url(query);
        tracing::info!(
            "Fetching users page {} ({} results)",
            query.page,
            query.results
        );
        tracing::debug!("Random user URL: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&error_text),
            });
        }

        // Read as text first so a malformed body surfaces as a decode error
        let body = response.text().await?;
        let data: ApiResponse = serde_json::from_str(&body)?;

        tracing::info!(
            "Fetched {} users (page {}, seed {})",
            data.results.len(),
            data.info.page,
            data.info.seed
        );
        Ok(data)
    }

    /// Fetches one page of users, logging and discarding any failure.
    ///
    /// Network, status and decode failures all log one error and return `None`.
    /// Use [`RandomUserClient::fetch_users`] to tell them apart.
    pub async fn get_users(&self, page: i64, results: i64) -> Option<ApiResponse> {
        match self.fetch_users(page, results).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!("Failed to fetch users: {}", e);
                None
            }
        }
    }

    /// Same as `get_users(1, 10)`.
    pub async fn get_default_users(&self) -> Option<ApiResponse> {
        self.get_users(DEFAULT_PAGE, DEFAULT_RESULTS).await
    }
}

/// Cuts an error body down to `MAX_ERROR_BODY_CHARS`, marking the cut with "...".
fn truncate_body(text: &str) -> String {
    match text.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RandomUserClient::default_endpoint().unwrap();
        assert_eq!(client.base_url(), "https://randomuser.me/api");
    }

    #[test]
    fn test_client_from_config_with_timeout() {
        let config = Config {
            base_url: "http://localhost:9999/api".to_string(),
            request_timeout: Some(Duration::from_secs(5)),
        };
        let client = RandomUserClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999/api");
    }

    #[test]
    fn test_request_url_exact() {
        let client = RandomUserClient::default_endpoint().unwrap();
        assert_eq!(
            client.request_url(&UserQuery::new(3, 25)),
            "https://randomuser.me/api?page=3&results=25"
        );
    }

    #[test]
    fn test_request_url_passes_through_unvalidated_values() {
        let client = RandomUserClient::default_endpoint().unwrap();
        assert_eq!(
            client.request_url(&UserQuery::new(0, -5)),
            "https://randomuser.me/api?page=0&results=-5"
        );
    }

    #[test]
    fn test_default_query_is_first_page_of_ten() {
        let client = RandomUserClient::default_endpoint().unwrap();
        assert_eq!(UserQuery::default(), UserQuery::new(1, 10));
        assert_eq!(
            client.request_url(&UserQuery::default()),
            "https://randomuser.me/api?page=1&results=10"
        );
    }

    #[test]
    fn test_request_url_with_seed_is_encoded() {
        let client = RandomUserClient::default_endpoint().unwrap();
        let query = UserQuery::new(2, 5).with_seed("foo bar&baz");
        assert_eq!(
            client.request_url(&query),
            "https://randomuser.me/api?page=2&results=5&seed=foo+bar%26baz"
        );
    }

    #[test]
    fn test_truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("Service unavailable"), "Service unavailable");
        let exact = "x".repeat(MAX_ERROR_BODY_CHARS);
        assert_eq!(truncate_body(&exact), exact);
    }

    #[test]
    fn test_truncate_body_cuts_on_char_boundary() {
        let long = "é".repeat(MAX_ERROR_BODY_CHARS + 100);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), MAX_ERROR_BODY_CHARS + 3);
    }
}

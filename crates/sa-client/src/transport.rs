//! HTTP transport layer for Seeking Alpha requests

use reqwest::{Client, Response, StatusCode};
use sa_core::{Config, Endpoint, Error, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Seeking Alpha refuses requests without a browser user agent
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0 Safari/537.36";

/// HTTP transport layer for making requests to Seeking Alpha
#[derive(Debug)]
pub struct Transport {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://mock.seekingalpha.com".to_string(),
            max_retries: 0,
        }
    }

    /// Fetch a resource and return the body as text
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The Seeking Alpha resource to call
    /// * `suffix` - Extra path segment after the endpoint path (page number, article id)
    /// * `params` - Query parameters for the request
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    pub async fn get_text(
        &self,
        endpoint: Endpoint,
        suffix: Option<&str>,
        params: HashMap<String, String>,
    ) -> Result<String> {
        let url = self.build_url(endpoint, suffix, params)?;
        debug!("Making request to: {}", url);

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(2_u64.pow(attempt) * 1000); // Exponential backoff
                warn!("Retrying request in {}ms (attempt {})", delay.as_millis(), attempt + 1);
                tokio::time::sleep(delay).await;
            }

            match self.make_request(&url).await {
                Ok(response) => {
                    let text = response
                        .text()
                        .await
                        .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

                    debug!("Response body length: {} bytes", text.len());
                    return Ok(text);
                }
                // Only transport failures are worth another attempt
                Err(e @ Error::Http(_)) => {
                    warn!("Request failed (attempt {}): {}", attempt + 1, e);
                    last_error = Some(e);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Http("Max retries exceeded".to_string())))
    }

    /// Fetch a JSON resource and deserialize it
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    pub async fn get_json<T>(
        &self,
        endpoint: Endpoint,
        suffix: Option<&str>,
        params: HashMap<String, String>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let text = self.get_text(endpoint, suffix, params).await?;

        self.check_api_error(&text)?;

        match serde_json::from_str::<T>(&text) {
            Ok(data) => {
                info!("Successfully parsed response for endpoint: {}", endpoint);
                Ok(data)
            }
            Err(e) => {
                error!("Failed to parse JSON response: {}", e);
                error!("Response text (first 500 chars): {}", preview(&text, 500));
                Err(Error::Parse(format!(
                    "Failed to parse response: {}. Response: {}",
                    e,
                    preview(&text, 200)
                )))
            }
        }
    }

    /// Build the full URL for a request
    fn build_url(
        &self,
        endpoint: Endpoint,
        suffix: Option<&str>,
        params: HashMap<String, String>,
    ) -> Result<String> {
        let mut path = format!("{}/{}", self.base_url, endpoint.path());
        if let Some(suffix) = suffix {
            path.push('/');
            path.push_str(suffix.trim_matches('/'));
        }

        let mut url =
            Url::parse(&path).map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

        if !params.is_empty() {
            // Sorted so the same request always yields the same URL
            let mut params: Vec<_> = params.into_iter().collect();
            params.sort();
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(&key, &value);
            }
        }

        Ok(url.to_string())
    }

    /// Make the actual HTTP request
    async fn make_request(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            return Ok(response);
        }

        error!("Request failed with status: {}", status);
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                Err(Error::RateLimit("Seeking Alpha request limit exceeded".to_string()))
            }
            StatusCode::NOT_FOUND => Err(Error::Api(format!("Resource not found: {}", url))),
            StatusCode::FORBIDDEN => {
                Err(Error::Api("Request blocked by Seeking Alpha (403)".to_string()))
            }
            _ => Err(Error::Http(format!("HTTP error: {}", status))),
        }
    }

    /// Check for JSON:API error documents in a successful response
    fn check_api_error(&self, response_text: &str) -> Result<()> {
        if !response_text.contains("\"errors\"") {
            return Ok(());
        }

        let value: serde_json::Value = match serde_json::from_str(response_text) {
            Ok(v) => v,
            Err(_) => return Ok(()),
        };

        if let Some(first) = value.get("errors").and_then(|e| e.as_array()).and_then(|a| a.first())
        {
            let detail = first
                .get("detail")
                .or_else(|| first.get("title"))
                .and_then(|d| d.as_str())
                .unwrap_or("unknown error");
            return Err(Error::Api(detail.to_string()));
        }

        Ok(())
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_build_url() {
        let transport = Transport::new_mock();
        let mut params = HashMap::new();
        params.insert("page[number]".to_string(), "2".to_string());

        let url = transport.build_url(Endpoint::NewsList, None, params).unwrap();

        assert!(url.starts_with("https://mock.seekingalpha.com/api/v3/news?"));
        assert!(url.contains("page%5Bnumber%5D=2"));
    }

    #[test]
    fn test_build_url_with_suffix() {
        let transport = Transport::new_mock();
        let url = transport.build_url(Endpoint::EarningsCalendar, Some("3"), HashMap::new()).unwrap();
        assert_eq!(url, "https://mock.seekingalpha.com/earnings/earnings-calendar/3");
    }

    #[test]
    fn test_check_api_error_document() {
        let transport = Transport::new_mock();
        let response = r#"{"errors": [{"status": "404", "title": "Record not found"}]}"#;

        match transport.check_api_error(response) {
            Err(Error::Api(msg)) => assert_eq!(msg, "Record not found"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_api_error_success() {
        let transport = Transport::new_mock();
        let response = r#"{"data": []}"#;
        assert!(transport.check_api_error(response).is_ok());
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("héllo", 2), "hé");
        assert_eq!(preview("abc", 10), "abc");
    }
}

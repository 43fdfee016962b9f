//! Best-effort JSON fetching
//!
//! The backend API is an optional collaborator: every read is independent,
//! unordered, and best-effort. A network failure, a non-2xx status, or an
//! undecodable body all resolve to "no data yet" (empty list / `None`),
//! never to an error the caller has to handle.

use std::time::Duration;

use serde::de::DeserializeOwned;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper around `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct JsonApi {
    base_url: String,
    client: reqwest::Client,
}

impl JsonApi {
    /// Create a client for the given base URL (e.g. `http://localhost:4000`).
    ///
    /// Falls back to a default `reqwest::Client` if the builder fails,
    /// which only happens when TLS backends are misconfigured.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON array, resolving any failure to an empty vector.
    pub async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        self.fetch_one(path).await.unwrap_or_default()
    }

    /// GET a single JSON document, resolving any failure to `None`.
    pub async fn fetch_one<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "API request failed, treating as empty");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                url = %url,
                status = %response.status(),
                "API returned non-success status, treating as empty"
            );
            return None;
        }

        match response.json::<T>().await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "API body undecodable, treating as empty");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Record {
        #[allow(dead_code)]
        id: String,
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let api = JsonApi::new("http://localhost:4000/");
        assert_eq!(api.base_url(), "http://localhost:4000");
    }

    #[tokio::test]
    async fn test_unreachable_host_resolves_to_empty() {
        // Port 1 is never listening; connection refused must become empty.
        let api = JsonApi::new("http://127.0.0.1:1");

        let list: Vec<Record> = api.fetch_list("/api/students").await;
        assert!(list.is_empty());

        let one: Option<Record> = api.fetch_one("/api/admin/profile").await;
        assert!(one.is_none());
    }
}

//! Directory API Client
//!
//! Single read-only GET against the fixed collection endpoint.

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Person};

/// Fixed remote collection endpoint
pub const DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Source of directory records
///
/// The cache only ever calls this once per activation.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch the full collection
    async fn fetch(&self) -> DomainResult<Vec<Person>>;
}

/// HTTP implementation against the fixed endpoint
pub struct HttpDirectoryClient {
    client: reqwest::Client,
    url: String,
}

impl HttpDirectoryClient {
    pub fn new() -> Self {
        Self::with_url(DIRECTORY_URL)
    }

    /// Point at a different endpoint (tests, mirrors)
    pub fn with_url(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }
}

impl Default for HttpDirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn fetch(&self) -> DomainResult<Vec<Person>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::Fetch(format!("Failed to fetch users: {}", e)))?;

        // Any non-success status collapses into one generic failure,
        // matching the original client.
        if !response.status().is_success() {
            return Err(DomainError::Fetch(format!(
                "Failed to fetch users: HTTP {}",
                response.status()
            )));
        }

        response
            .json::<Vec<Person>>()
            .await
            .map_err(|e| DomainError::Fetch(format!("Failed to fetch users: {}", e)))
    }
}

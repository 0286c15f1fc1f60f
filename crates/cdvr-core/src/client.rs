//! HTTP client for the Channels DVR server
//!
//! Thin wrapper over `reqwest` that applies finite timeouts and
//! classifies failures into the lookup's error taxonomy.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{DvrError, Result};
use crate::types::{MediaInfo, Recording, Rule};
use crate::url::{build_files_url, build_jobs_url, build_mediainfo_url, build_rules_url};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Connect timeout in seconds (default: 5)
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            timeout_secs: 30,
        }
    }
}

/// HTTP client bound to one Channels DVR server
///
/// Performs the read-only GET requests the lookup needs and decodes
/// the JSON responses into typed models.
pub struct DvrClient {
    client: reqwest::Client,
    base_url: String,
}

impl DvrClient {
    /// Create a new client for the given base URL with default configuration
    ///
    /// # Arguments
    /// * `base_url` - Server base URL (e.g., "http://127.0.0.1:8089")
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(base_url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(DvrError::Connection)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Base URL of the server this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a URL and decode its JSON body
    ///
    /// Failures are classified: send errors become `Connection`,
    /// non-2xx statuses become `Status`, and bodies that do not
    /// decode into `T` become `Shape`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DvrError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| DvrError::Shape {
            url: url.to_string(),
            detail: e.to_string(),
        })
    }

    /// Fetch the scheduled recordings from `/dvr/jobs`
    ///
    /// Jobs marked as skipped will not record and are dropped.
    pub async fn scheduled_recordings(&self) -> Result<Vec<Recording>> {
        let jobs: Vec<Recording> = self.get_json(&build_jobs_url(&self.base_url)).await?;
        Ok(jobs.into_iter().filter(|job| !job.skipped).collect())
    }

    /// Fetch the library (already recorded) programs from `/dvr/files`
    pub async fn library_recordings(&self) -> Result<Vec<Recording>> {
        self.get_json(&build_files_url(&self.base_url)).await
    }

    /// Fetch all passes from `/dvr/rules`, reduced to an ID -> name map
    pub async fn passes(&self) -> Result<HashMap<String, String>> {
        let rules: Vec<Rule> = self.get_json(&build_rules_url(&self.base_url)).await?;
        Ok(rules.into_iter().map(|rule| (rule.id, rule.name)).collect())
    }

    /// Fetch the on-disk file name of a recorded file from its media info
    pub async fn recorded_file_name(&self, file_id: &str) -> Result<String> {
        let info: MediaInfo = self
            .get_json(&build_mediainfo_url(&self.base_url, file_id))
            .await?;
        Ok(info.format.filename)
    }
}

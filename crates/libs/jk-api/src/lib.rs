//! HTTP client library for the Jenkins JSON API.
//!
//! This library provides a typed wrapper around reqwest for the endpoints the
//! JK tools read: the job index, build records, console output, the build
//! queue, and node liveness.
//!
//! # Examples
//!
//! ```rust,no_run
//! use jk_api::JenkinsClient;
//!
//! # async fn example() -> jk_api::prelude::Result<()> {
//! let jenkins =
//!     JenkinsClient::connect("https://ci.example.com", "admin", Some("token".into())).await?;
//! for job in jenkins.jobs().await? {
//!     println!("{} ({})", job.name, job.url);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::prelude::*;

pub mod build;
pub mod error;
pub mod job;
pub mod node;
pub mod prelude;
pub mod queue;

pub use build::Build;
pub use job::{JobDetail, JobSummary};
pub use node::{NodeState, NodeSummary};

/// Client for a single Jenkins server.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct JenkinsClient {
    url: String,
    user: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl JenkinsClient {
    /// Creates a client for the server at `url` without contacting it.
    pub fn new(url: impl Into<String>, user: impl Into<String>, token: Option<String>) -> Self {
        let url = url.into();
        let client = reqwest::ClientBuilder::new()
            .build()
            .expect("Failed to build reqwest Client");
        Self {
            url: url.trim_end_matches('/').to_string(),
            user: user.into(),
            token,
            client,
        }
    }

    /// Creates a client and verifies the credentials with a probe request.
    pub async fn connect(
        url: impl Into<String>,
        user: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let jenkins = Self::new(url, user, token);
        jenkins.get("api/json").await?;
        Ok(jenkins)
    }

    /// Constructs the full URL path for an endpoint.
    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.url)
    }

    /// Makes an authenticated GET request, mapping unsuccessful statuses to
    /// errors.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = self.path(endpoint);
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.user, self.token.as_ref())
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Unauthorized(status));
        }
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status,
            });
        }
        Ok(response)
    }

    /// Makes a GET request and deserializes the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let body = self.get(endpoint).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Makes a GET request and returns the response body verbatim.
    pub(crate) async fn get_text(&self, endpoint: &str) -> Result<String> {
        Ok(self.get(endpoint).await?.text().await?)
    }
}

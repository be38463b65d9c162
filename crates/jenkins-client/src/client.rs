//! Jenkins client trait and server coordinates
//!
//! [`JenkinsClient`] is the fetch seam of the crate: the check logic talks
//! to the trait, the binary plugs in the reqwest-backed implementation,
//! and tests substitute stubs. [`JenkinsServer`] carries the configured
//! coordinates and owns the URL construction.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::BuildList;

/// Errors surfaced by a [`JenkinsClient`] fetch.
///
/// Every variant is terminal for the whole check; callers map it to an
/// UNKNOWN verdict rather than retrying.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection-level failure (refused, DNS, TLS, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered outside the 2xx range.
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The body was not the JSON document the job API promises.
    #[error("invalid build list payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coordinates of the Jenkins server to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JenkinsServer {
    /// URL scheme, `http` or `https`.
    pub scheme: String,
    /// Hostname, without scheme or port.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl JenkinsServer {
    /// Create server coordinates.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    /// Build-list endpoint for a job, restricted to the fields and history
    /// depth the check needs. `{,N}` is Jenkins' tree range selector for
    /// "the first N array elements". The job name is interpolated
    /// verbatim, so folder-style paths (`a/job/b`) keep working.
    pub fn build_list_url(&self, job_name: &str, max_builds: u32) -> String {
        format!(
            "{}/job/{}/api/json?tree=builds[result,number,timestamp]{{,{}}}",
            self.base_url(),
            job_name,
            max_builds
        )
    }
}

/// Jenkins build-status API client.
///
/// Implementations must be `Send + Sync` so a client can be shared across
/// async tasks. The one production implementation is
/// [`HttpJenkinsClient`]; tests drive the check against stubs.
///
/// [`HttpJenkinsClient`]: crate::http_client::HttpJenkinsClient
#[async_trait]
pub trait JenkinsClient: Send + Sync {
    /// Fetch the `max_builds` most recent build attempts of `job_name`,
    /// most-recent-first.
    async fn fetch_builds(
        &self,
        job_name: &str,
        max_builds: u32,
    ) -> Result<BuildList, ClientError>;
}

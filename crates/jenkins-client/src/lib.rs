//! Jenkins build-status API client
//!
//! A small client for the slice of the Jenkins JSON API a monitoring check
//! needs: the most recent build attempts of one job, with their build
//! numbers, terminal results and epoch-millisecond start timestamps.
//!
//! The fetch surface is a trait ([`JenkinsClient`]) so consumers can swap
//! in a stub under test; [`HttpJenkinsClient`] is the reqwest-backed
//! production implementation. Timestamp handling lives in
//! [`EpochMillis`], which speaks the upstream's millisecond wire format
//! instead of RFC 3339.
//!
//! # Example
//!
//! ```rust,no_run
//! use jenkins_client::{HttpJenkinsClient, JenkinsClient, JenkinsServer};
//!
//! # async fn example() -> Result<(), jenkins_client::ClientError> {
//! let server = JenkinsServer::new("http", "ci.example.com", 8080);
//! let client = HttpJenkinsClient::new(server);
//!
//! let list = client.fetch_builds("nightly", 10).await?;
//! for build in &list.builds {
//!     println!("#{} started {}", build.number, build.timestamp);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http_client;
pub mod timestamp;
pub mod types;

/// Default Jenkins scheme when none is configured.
pub const DEFAULT_SCHEME: &str = "http";

/// Default Jenkins host when none is configured.
pub const DEFAULT_HOST: &str = "localhost";

/// Default Jenkins port when none is configured.
pub const DEFAULT_PORT: u16 = 8080;

pub use client::{ClientError, JenkinsClient, JenkinsServer};
pub use http_client::HttpJenkinsClient;
pub use timestamp::{EpochMillis, ParseTimestampError};
pub use types::{Build, BuildList};

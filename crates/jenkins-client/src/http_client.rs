//! Reqwest-backed Jenkins client
//!
//! Direct implementation of the [`JenkinsClient`] trait against a live
//! server. One GET per fetch, no caching, no retries, and no request
//! timeout: a hung server blocks the check until the monitoring agent
//! kills it.

use async_trait::async_trait;
use log::debug;

use crate::client::{ClientError, JenkinsClient, JenkinsServer};
use crate::types::BuildList;

/// Jenkins API client issuing real HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpJenkinsClient {
    server: JenkinsServer,
    client: reqwest::Client,
}

impl HttpJenkinsClient {
    /// Create a client for the given server coordinates.
    pub fn new(server: JenkinsServer) -> Self {
        Self {
            server,
            client: reqwest::Client::new(),
        }
    }

    /// The server this client talks to.
    pub fn server(&self) -> &JenkinsServer {
        &self.server
    }
}

#[async_trait]
impl JenkinsClient for HttpJenkinsClient {
    async fn fetch_builds(
        &self,
        job_name: &str,
        max_builds: u32,
    ) -> Result<BuildList, ClientError> {
        let url = self.server.build_list_url(job_name, max_builds);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status, url });
        }

        let body = response.text().await?;
        let list: BuildList = serde_json::from_str(&body)?;

        debug!("fetched {} builds for job {}", list.builds.len(), job_name);
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(mock: &MockServer) -> HttpJenkinsClient {
        let addr = mock.address();
        HttpJenkinsClient::new(JenkinsServer::new("http", addr.ip().to_string(), addr.port()))
    }

    #[tokio::test]
    async fn test_fetch_builds_parses_the_job_document() -> Result<()> {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/job/sleep30/api/json"))
            .and(query_param("tree", "builds[result,number,timestamp]{,2}"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_class": "hudson.model.FreeStyleProject",
                "builds": [
                    { "number": 57, "result": null, "timestamp": 1503146442652u64 },
                    { "number": 51, "result": "SUCCESS", "timestamp": 1503144132413u64 }
                ]
            })))
            .mount(&mock)
            .await;

        let list = client_for(&mock).fetch_builds("sleep30", 2).await?;

        assert_eq!(list.builds.len(), 2);
        assert_eq!(list.builds[0].number, 57);
        assert!(list.builds[0].is_unfinished());
        assert_eq!(list.builds[1].result.as_deref(), Some("SUCCESS"));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_builds_tolerates_sparse_objects() -> Result<()> {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/job/sparse/api/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "builds": [{}] })))
            .mount(&mock)
            .await;

        let list = client_for(&mock).fetch_builds("sparse", 10).await?;

        assert_eq!(list.builds.len(), 1);
        assert_eq!(list.builds[0].number, 0);
        assert!(list.builds[0].is_unfinished());
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_builds_rejects_error_status() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock)
            .await;

        let err = client_for(&mock)
            .fetch_builds("missing", 10)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Status { .. }));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_builds_rejects_non_json_body() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&mock)
            .await;

        let err = client_for(&mock)
            .fetch_builds("sleep30", 10)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_builds_rejects_unparsable_timestamp() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "builds": [{ "number": 9, "result": null, "timestamp": "soon" }]
            })))
            .mount(&mock)
            .await;

        let err = client_for(&mock)
            .fetch_builds("sleep30", 10)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
        assert!(err.to_string().contains("epoch-millisecond"));
    }

    #[tokio::test]
    async fn test_fetch_builds_surfaces_connection_failure() {
        // Grab a free port, then close it again so the connect is refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = HttpJenkinsClient::new(JenkinsServer::new("http", "127.0.0.1", port));
        let err = client.fetch_builds("sleep30", 10).await.unwrap_err();

        assert!(matches!(err, ClientError::Http(_)));
    }
}

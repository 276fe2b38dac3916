//! Client for a deployment's version endpoint

#[cfg(test)]
use mockall::automock;

use std::time::Duration;

use tracing::warn;

use crate::config::PROBE_TIMEOUT_MS;
use crate::error::ProbeError;
use crate::manifest::report::VersionReport;

/// Path of the version endpoint relative to the deployment base URL
pub const VERSION_PATH: &str = "/api/version";

/// Trait for fetching a version report from a running deployment
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionEndpoint: Send + Sync {
    /// Fetch the report served at `<base_url>/api/version`
    async fn fetch_report(&self, base_url: &str) -> Result<VersionReport, ProbeError>;
}

/// [`VersionEndpoint`] over HTTP
pub struct HttpVersionEndpoint {
    client: reqwest::Client,
}

impl HttpVersionEndpoint {
    pub fn new() -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("react-version-probe/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(PROBE_TIMEOUT_MS))
            .build()?;
        Ok(Self { client })
    }

    fn version_url(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), VERSION_PATH)
    }
}

#[async_trait::async_trait]
impl VersionEndpoint for HttpVersionEndpoint {
    async fn fetch_report(&self, base_url: &str) -> Result<VersionReport, ProbeError> {
        let url = Self::version_url(base_url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Version endpoint returned status {}: {}", status, url);
            return Err(ProbeError::UnexpectedStatus(status.as_u16()));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse version endpoint response: {}", e);
            ProbeError::InvalidResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::classifier::Classification;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_report_parses_version_response() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "react": "19.0.0",
                    "reactDom": "19.0.0",
                    "nextjs": "15.0.4",
                    "node": "v22.11.0",
                    "vulnerable": true,
                    "status": "VULNERABLE"
                }"#,
            )
            .create_async()
            .await;

        let endpoint = HttpVersionEndpoint::new().unwrap();
        let report = endpoint.fetch_report(&server.url()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(report.react, "19.0.0");
        assert_eq!(report.nextjs.as_deref(), Some("15.0.4"));
        assert_eq!(report.status, Classification::Vulnerable);
    }

    #[tokio::test]
    async fn fetch_report_accepts_base_url_with_trailing_slash() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/version")
            .with_status(200)
            .with_body(
                r#"{"react": "19.2.1", "reactDom": "19.2.1", "node": "v22.11.0", "vulnerable": false, "status": "FIXED"}"#,
            )
            .create_async()
            .await;

        let endpoint = HttpVersionEndpoint::new().unwrap();
        let report = endpoint
            .fetch_report(&format!("{}/", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(report.nextjs, None);
        assert_eq!(report.status, Classification::Fixed);
    }

    #[tokio::test]
    async fn fetch_report_returns_unexpected_status_on_server_error() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/api/version")
            .with_status(500)
            .with_body(r#"{"error": "Failed to get version information"}"#)
            .create_async()
            .await;

        let endpoint = HttpVersionEndpoint::new().unwrap();
        let result = endpoint.fetch_report(&server.url()).await;

        assert!(matches!(result, Err(ProbeError::UnexpectedStatus(500))));
    }

    #[tokio::test]
    async fn fetch_report_returns_invalid_response_on_unexpected_body() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/api/version")
            .with_status(200)
            .with_body(r#"{"message": "Hello World!"}"#)
            .create_async()
            .await;

        let endpoint = HttpVersionEndpoint::new().unwrap();
        let result = endpoint.fetch_report(&server.url()).await;

        assert!(matches!(result, Err(ProbeError::InvalidResponse(_))));
    }
}

use crate::error::Result;
use crate::gateway::HttpGateway;
use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde_json::Value;

use super::paths;

/// Capability set of the anomaly-detection plugin gateway.
///
/// Payloads are opaque JSON documents assembled by the caller; responses
/// come back as raw bytes and are never parsed here. Implementors must be
/// thread-safe (Send + Sync) so one client can serve concurrent callers.
#[async_trait]
pub trait DetectorGateway: Send + Sync {
    async fn create_detector(&self, payload: &Value) -> Result<Vec<u8>>;
    async fn start_detector(&self, id: &str) -> Result<()>;
    async fn stop_detector(&self, id: &str) -> Result<Option<String>>;
    async fn delete_detector(&self, id: &str) -> Result<()>;
    async fn search_detector(&self, query: &Value) -> Result<Vec<u8>>;
    async fn get_detector(&self, id: &str) -> Result<Vec<u8>>;
    async fn update_detector(&self, id: &str, payload: &Value) -> Result<()>;
}

/// REST client for the detector lifecycle operations.
pub struct DetectorClient {
    transport: HttpGateway,
}

impl DetectorClient {
    /// Creates a client around an explicitly constructed transport.
    pub fn new(transport: HttpGateway) -> Self {
        Self { transport }
    }

    fn endpoint_with_path(&self, path: &str) -> Result<Url> {
        let mut endpoint = self.transport.valid_endpoint()?;
        endpoint.set_path(path);
        Ok(endpoint)
    }

    /// One round trip against the plugin: resolve the endpoint, build the
    /// request, execute it, enforce the expected status.
    ///
    /// Endpoint resolution failures short-circuit before any network I/O.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
        expected_status: StatusCode,
    ) -> Result<Vec<u8>> {
        let url = self.endpoint_with_path(path)?;
        let request =
            self.transport
                .build_request(method, url, payload, HttpGateway::default_headers())?;
        self.transport.call(request, expected_status).await
    }
}

#[async_trait]
impl DetectorGateway for DetectorClient {
    /// Creates an anomaly detector job.
    ///
    /// `POST _plugins/_anomaly_detection/detectors`
    async fn create_detector(&self, payload: &Value) -> Result<Vec<u8>> {
        self.dispatch(
            Method::POST,
            &paths::create_path(),
            Some(payload),
            StatusCode::CREATED,
        )
        .await
    }

    /// Starts an anomaly detector job.
    ///
    /// `POST _plugins/_anomaly_detection/detectors/{id}/_start`
    async fn start_detector(&self, id: &str) -> Result<()> {
        self.dispatch(Method::POST, &paths::start_path(id), None, StatusCode::OK)
            .await
            .map(|_| ())
    }

    /// Stops an anomaly detector job.
    ///
    /// `POST _plugins/_anomaly_detection/detectors/{id}/_stop`
    ///
    /// The response body is returned as raw text, not decoded as JSON.
    async fn stop_detector(&self, id: &str) -> Result<Option<String>> {
        let response = self
            .dispatch(Method::POST, &paths::stop_path(id), None, StatusCode::OK)
            .await?;
        Ok(Some(String::from_utf8_lossy(&response).into_owned()))
    }

    /// Deletes a detector.
    ///
    /// `DELETE _plugins/_anomaly_detection/detectors/{id}`
    async fn delete_detector(&self, id: &str) -> Result<()> {
        self.dispatch(
            Method::DELETE,
            &paths::detector_path(id),
            None,
            StatusCode::OK,
        )
        .await
        .map(|_| ())
    }

    /// Returns the detectors matching a search query.
    ///
    /// `POST _plugins/_anomaly_detection/detectors/_search`
    async fn search_detector(&self, query: &Value) -> Result<Vec<u8>> {
        self.dispatch(
            Method::POST,
            &paths::search_path(),
            Some(query),
            StatusCode::OK,
        )
        .await
    }

    /// Returns all information about a detector.
    ///
    /// `GET _plugins/_anomaly_detection/detectors/{id}`
    async fn get_detector(&self, id: &str) -> Result<Vec<u8>> {
        self.dispatch(Method::GET, &paths::detector_path(id), None, StatusCode::OK)
            .await
    }

    /// Updates a detector, including description and feature changes.
    ///
    /// `PUT _plugins/_anomaly_detection/detectors/{id}`
    async fn update_detector(&self, id: &str, payload: &Value) -> Result<()> {
        self.dispatch(
            Method::PUT,
            &paths::detector_path(id),
            Some(payload),
            StatusCode::OK,
        )
        .await
        .map(|_| ())
    }
}

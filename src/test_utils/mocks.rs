//! Mock server helpers for testing.
//!
//! Wraps a mockito server with one helper per detector endpoint so tests
//! can mount canned plugin responses without repeating path templates.

use mockito::{Mock, Server, ServerGuard};

use crate::detector::paths;

/// Builder for creating mockito server mocks for detector endpoints.
pub struct MockDetectorServerBuilder {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockDetectorServerBuilder {
    /// Creates a new mock server builder.
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Gets the server URL.
    pub fn url(&self) -> String {
        self.server.url()
    }

    async fn mock(mut self, method: &str, path: String, status: usize, body: &str) -> Self {
        let mock = self
            .server
            .mock(method, format!("/{}", path).as_str())
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    /// Mounts a response for detector creation.
    pub async fn mock_create(self, status: usize, body: &str) -> Self {
        self.mock("POST", paths::create_path(), status, body).await
    }

    /// Mounts a response for a detector search.
    pub async fn mock_search(self, status: usize, body: &str) -> Self {
        self.mock("POST", paths::search_path(), status, body).await
    }

    /// Mounts a response for a single-detector get.
    pub async fn mock_get(self, id: &str, status: usize, body: &str) -> Self {
        self.mock("GET", paths::detector_path(id), status, body).await
    }

    /// Mounts a response for a detector start.
    pub async fn mock_start(self, id: &str, status: usize, body: &str) -> Self {
        self.mock("POST", paths::start_path(id), status, body).await
    }

    /// Mounts a response for a detector stop.
    pub async fn mock_stop(self, id: &str, status: usize, body: &str) -> Self {
        self.mock("POST", paths::stop_path(id), status, body).await
    }

    /// Mounts a response for a detector delete.
    pub async fn mock_delete(self, id: &str, status: usize, body: &str) -> Self {
        self.mock("DELETE", paths::detector_path(id), status, body)
            .await
    }

    /// Mounts a response for a detector update.
    pub async fn mock_update(self, id: &str, status: usize, body: &str) -> Self {
        self.mock("PUT", paths::detector_path(id), status, body).await
    }

    /// Asserts that every mounted mock was hit.
    pub async fn assert_all(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}

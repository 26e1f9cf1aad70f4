//! Profile builders for tests.

use crate::config::Profile;

/// Builder for creating test profiles.
#[derive(Debug)]
pub struct TestProfileBuilder {
    endpoint: String,
    username: Option<String>,
    password: Option<String>,
}

impl TestProfileBuilder {
    /// Creates a new test profile builder with default values.
    pub fn new() -> Self {
        Self {
            endpoint: "http://test.local:9200".to_string(),
            username: None,
            password: None,
        }
    }

    /// Sets the endpoint for the test profile.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the credentials for the test profile.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Builds the profile.
    pub fn build(self) -> Profile {
        Profile {
            endpoint: self.endpoint,
            username: self.username,
            password: self.password,
        }
    }
}

/// Creates a default test profile.
pub fn test_profile() -> Profile {
    TestProfileBuilder::new().build()
}

/// Creates a test profile pointing at a mock server URL.
pub fn test_profile_with_endpoint(endpoint: impl Into<String>) -> Profile {
    TestProfileBuilder::new().with_endpoint(endpoint).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let profile = TestProfileBuilder::new()
            .with_endpoint("http://custom.local:9200")
            .with_credentials("admin", "admin-pass")
            .build();

        assert_eq!(profile.endpoint, "http://custom.local:9200");
        assert_eq!(profile.credentials(), Some(("admin", "admin-pass")));
    }

    #[test]
    fn test_convenience_functions() {
        let profile = test_profile();
        assert_eq!(profile.endpoint, "http://test.local:9200");
        assert!(profile.credentials().is_none());

        let profile = test_profile_with_endpoint("http://mock.local:9200");
        assert_eq!(profile.endpoint, "http://mock.local:9200");
    }
}

use crate::error::ConfigError;
use reqwest::Url;
use serde_derive::Deserialize;

/// A named connection profile: cluster address plus optional credentials.
///
/// Resolved from the environment by [`load_profile`], or constructed
/// directly by callers that manage profiles themselves.
#[derive(Deserialize, Debug, Clone)]
pub struct Profile {
    pub endpoint: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl Profile {
    /// Returns the parsed base endpoint.
    ///
    /// Fails when the profile carries no endpoint, the value does not parse
    /// as an absolute URL, or the scheme is not http(s).
    pub fn valid_endpoint(&self) -> Result<Url, ConfigError> {
        let raw = self.endpoint.trim();
        if raw.is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        let url = Url::parse(raw).map_err(|err| ConfigError::invalid_endpoint(raw, err))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::invalid_endpoint(
                raw,
                format!("unsupported scheme '{}'", other),
            )),
        }
    }

    /// Returns the basic-auth credential pair when both halves are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }
}

pub fn load_profile() -> Result<Profile, ConfigError> {
    match envy::prefixed("OPENSEARCH_").from_env::<Profile>() {
        Ok(profile) => Ok(profile),
        Err(err) => Err(ConfigError::env_parse(err)),
    }
}

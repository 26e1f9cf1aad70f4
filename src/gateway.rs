use crate::config::Profile;
use crate::error::{Error, RequestError, Result, TransportError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, Request, StatusCode, Url};
use serde_json::Value;

/// Authenticated REST caller shared by all plugin gateways.
///
/// Owns the HTTP client and the resolved profile; holds no other state, so a
/// single instance can serve concurrent calls from many tasks. Cancellation
/// follows the usual async contract: dropping an in-flight `call` future
/// aborts the round trip.
pub struct HttpGateway {
    http_client: HttpClient,
    profile: Profile,
}

impl HttpGateway {
    pub fn new(profile: Profile) -> Self {
        Self {
            http_client: HttpClient::new(),
            profile,
        }
    }

    /// Constructs a gateway around a caller-tuned HTTP client, for callers
    /// that need custom timeouts or TLS settings.
    pub fn with_client(http_client: HttpClient, profile: Profile) -> Self {
        Self {
            http_client,
            profile,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns the profile's base endpoint, validated.
    pub fn valid_endpoint(&self) -> Result<Url> {
        Ok(self.profile.valid_endpoint()?)
    }

    /// Default headers attached to every plugin request.
    pub fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn auth_header(username: &str, password: &str) -> Result<HeaderValue, RequestError> {
        let token = STANDARD.encode(format!("{}:{}", username, password));
        let mut value = HeaderValue::from_str(&format!("Basic {}", token))
            .map_err(|err| RequestError::invalid_header(AUTHORIZATION.as_str(), err))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Assembles a request for the given absolute URL.
    ///
    /// The supplied headers are attached as-is; profile credentials become a
    /// basic-auth `Authorization` header, and the payload, when present, is
    /// JSON-encoded as the request body.
    pub fn build_request(
        &self,
        method: Method,
        url: Url,
        payload: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Request> {
        let mut builder = self.http_client.request(method, url).headers(headers);
        if let Some((username, password)) = self.profile.credentials() {
            builder = builder.header(AUTHORIZATION, Self::auth_header(username, password)?);
        }
        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload).map_err(RequestError::from)?;
            builder = builder.body(body);
        }
        let request = builder.build().map_err(RequestError::from)?;
        Ok(request)
    }

    /// Performs the round trip and enforces the expected status code.
    ///
    /// Returns the raw response body on success. A response with any other
    /// status yields [`Error::UnexpectedStatus`] carrying the actual code
    /// and the error body.
    pub async fn call(&self, request: Request, expected_status: StatusCode) -> Result<Vec<u8>> {
        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching request");
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(TransportError::from_send)?;
        let status = response.status();
        let body = response.bytes().await.map_err(TransportError::Body)?;
        if status != expected_status {
            tracing::debug!(%status, expected = %expected_status, "unexpected response status");
            return Err(Error::unexpected_status(
                expected_status,
                status,
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }
        Ok(body.to_vec())
    }
}

//! REST gateway for the OpenSearch anomaly-detection plugin.
//!
//! This crate wraps the detector lifecycle endpoints of the plugin —
//! create, start, stop, search, get, update, delete — behind a typed async
//! client. Payloads are opaque JSON documents and responses are returned as
//! raw bytes; parsing either side is the caller's business.
//!
//! # Architecture
//!
//! Three layers, each injected into the next:
//! - [`config::Profile`] resolves the cluster endpoint and credentials
//!   (from `OPENSEARCH_*` environment variables via [`load_profile`]),
//! - [`gateway::HttpGateway`] builds authenticated requests and performs the
//!   round trip, enforcing the expected status code per call,
//! - [`detector::DetectorClient`] maps each lifecycle operation onto a
//!   method, path template and expected status.
//!
//! Every call is a single atomic round trip: no retries, no caching, no
//! shared mutable state. Cancellation is the usual async contract — drop the
//! future (or wrap it in a timeout) and the transport aborts.
//!
//! ```no_run
//! use opensearch_ad_gateway::{DetectorClient, DetectorGateway, HttpGateway, Profile};
//!
//! # async fn run() -> opensearch_ad_gateway::Result<()> {
//! let profile = Profile {
//!     endpoint: "https://localhost:9200".to_string(),
//!     username: None,
//!     password: None,
//! };
//! let client = DetectorClient::new(HttpGateway::new(profile));
//! let detector = client.get_detector("m4ccEnIBTXsGi3mvMt9p").await?;
//! println!("{}", String::from_utf8_lossy(&detector));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod gateway;

#[cfg(test)]
mod test_utils;

pub use config::{load_profile, Profile};
pub use detector::{DetectorClient, DetectorGateway};
pub use error::{ConfigError, Error, RequestError, Result, TransportError};
pub use gateway::HttpGateway;

mod client;
pub mod paths;

pub use client::{DetectorClient, DetectorGateway};

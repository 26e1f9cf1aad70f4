//! Path templates for the anomaly-detection plugin REST surface.
//!
//! All detector endpoints hang off one resource root; the builders here
//! substitute the detector id into the templates so every operation shares
//! the same path assembly.

/// Resource root of the anomaly-detection plugin.
pub const DETECTORS_BASE: &str = "_plugins/_anomaly_detection/detectors";

/// `POST` target for detector creation.
pub fn create_path() -> String {
    DETECTORS_BASE.to_string()
}

/// `POST` target for detector search queries.
pub fn search_path() -> String {
    format!("{}/_search", DETECTORS_BASE)
}

/// Target for get, update and delete of a single detector.
pub fn detector_path(id: &str) -> String {
    format!("{}/{}", DETECTORS_BASE, id)
}

/// `POST` target that starts a detector job.
pub fn start_path(id: &str) -> String {
    format!("{}/{}/_start", DETECTORS_BASE, id)
}

/// `POST` target that stops a detector job.
pub fn stop_path(id: &str) -> String {
    format!("{}/{}/_stop", DETECTORS_BASE, id)
}

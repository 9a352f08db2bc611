//! Chart style detection seam.
//!
//! Real image understanding is out of scope for this workspace; what matters
//! is the contract. [`StyleDetector`] is the pluggable seam a genuine vision
//! model would implement, and [`StubDetector`] is the shipped stand-in: it
//! derives a stable pseudo-detection from the image file name so demo flows
//! behave consistently across runs.

#![deny(unsafe_code)]

mod stub;
mod synthetic;

use plotsense_model::VisionAnalysis;

pub use stub::StubDetector;

/// Analyzes a chart image and reports the detected chart style.
///
/// The suggestion engine consumes only `detected_label`; the sample rows
/// exist so a caller with no dataset of their own can still preview
/// suggestions matching the detected style.
pub trait StyleDetector {
    fn analyze(&self, file_name: &str, image_bytes: &[u8]) -> VisionAnalysis;
}

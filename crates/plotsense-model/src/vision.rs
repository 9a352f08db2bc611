use serde::{Deserialize, Serialize};

use crate::Row;

/// Result contract of an image-based chart style detector.
///
/// The analysis core only reads `detected_label` (as its preferred-style
/// hint); the rest exists for preview/demo surfaces. Detectors are external
/// collaborators and may be arbitrarily sophisticated. The workspace ships a
/// deterministic stand-in in `plotsense-vision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionAnalysis {
    /// Free-form chart kind label, e.g. "Bar Chart".
    pub detected_label: String,
    /// Detector confidence in `[0, 1]`.
    pub confidence: f64,
    /// Synthetic rows shaped like the detected chart's typical input.
    pub sample_data: Vec<Row>,
    /// Human-readable one-line description of the detection.
    pub summary: String,
}

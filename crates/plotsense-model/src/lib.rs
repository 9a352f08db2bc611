//! Data contracts shared across the PlotSense workspace.
//!
//! This crate defines the row/value model that the loaders produce and the
//! analysis core consumes, plus the column profile and style-detection
//! contracts exchanged between components. It deliberately contains no
//! behavior beyond construction and (de)serialization.

#![deny(unsafe_code)]

mod column;
mod row;
mod value;
mod vision;

pub use column::{ColumnKind, ColumnProfile};
pub use row::Row;
pub use value::Value;
pub use vision::VisionAnalysis;

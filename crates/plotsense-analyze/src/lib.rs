//! The PlotSense analysis core: column classification and rule-based chart
//! suggestion.
//!
//! Two pure, synchronous computations run in sequence per request:
//!
//! 1. [`classify`] infers a semantic type and distinct-value count for every
//!    column of a row-oriented dataset.
//! 2. [`generate`] evaluates a fixed, ordered catalog of chart rules against
//!    the classified columns, producing suggestions bound to the live data
//!    as declarative Vega-Lite specifications, with diversity filtering and
//!    optional preferred-style reordering.
//!
//! Both functions hold no state between calls and are deterministic for
//! identical inputs, ids included. Degenerate inputs (no rows, no columns,
//! missing optional columns for a rule) are never errors; every partial-data
//! case degrades to a defined fallback.

#![deny(unsafe_code)]

mod catalog;
mod classify;
mod columns;
mod datetime;
mod generate;
mod types;

pub use classify::classify;
pub use columns::ColumnPartitions;
pub use generate::{generate, normalize_kind};
pub use types::ChartSuggestion;

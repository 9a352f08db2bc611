//! Typed, emit-only model of the slice of Vega-Lite v5 that PlotSense emits.
//!
//! Vega-Lite is treated as an external, versioned wire format: these types
//! exist so the suggestion generator can build syntactically valid chart
//! specifications without stringly-typed JSON, and so tests can pin the
//! exact serialized shapes. Nothing in this workspace ever reads a spec back
//! (rendering belongs to an external embedder), so the types implement
//! `Serialize` only.
//!
//! Serialization rules mirror the Vega-Lite schema: camelCase keys, absent
//! properties omitted entirely, and `axis`/`legend` suppression expressed as
//! a literal JSON `null`.

#![deny(unsafe_code)]

mod encoding;
mod mark;
mod spec;

pub use encoding::{Aggregate, Channel, Disabled, Encoding, FieldType, Scale, ScaleType, Sort, Stack};
pub use mark::{Mark, MarkDef, MarkType};
pub use spec::{
    InlineData, Resolve, ResolveMode, ScaleResolve, Transform, UnitSpec, VEGA_LITE_SCHEMA,
    VegaLiteSpec, ViewConfig,
};

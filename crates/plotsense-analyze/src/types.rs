use serde::Serialize;

use plotsense_vega::VegaLiteSpec;

/// One ranked chart proposal, bound to the dataset it was generated from.
///
/// Suggestions are created fresh on every generation call and are immutable
/// output for the caller; the only post-creation mutation is the
/// preference-match caveat the generator may set while reordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSuggestion {
    /// Sequential id, dense over accepted suggestions (`chart-1`, `chart-2`, ...).
    pub id: String,
    pub title: String,
    /// Free-form kind label, e.g. "Bar Chart"; drives diversity filtering
    /// and preference matching.
    pub chart_kind: String,
    /// Why this chart fits the data, naming the columns involved.
    pub rationale: String,
    /// Columns the spec encodes, in encoding order.
    pub columns_used: Vec<String>,
    /// Kind labels of reasonable substitute charts.
    pub alternatives: Vec<String>,
    /// Declarative rendering specification with the data embedded inline.
    pub render_spec: VegaLiteSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caveat: Option<String>,
}

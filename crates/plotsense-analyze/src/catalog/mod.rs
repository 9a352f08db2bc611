//! The fixed, ordered chart rule catalog.
//!
//! Rules are data, not branching code: each entry pairs a gating predicate
//! over the partitioned column kinds with a builder that interpolates
//! concrete column names into a titled, data-bound Vega-Lite spec. The
//! generator walks [`CATALOG`] in order; order matters, because later rules
//! reuse earlier columns positionally and the diversity filter's running
//! state depends on what fired before.
//!
//! Builders return `Option` so a rule can decline even after its gate
//! passed; none of them may panic on missing optional columns — every
//! higher-order column slot degrades through the fallback accessors on
//! [`ColumnPartitions`].

mod comparison;
mod composition;
mod distribution;
mod temporal;

use plotsense_model::Row;
use plotsense_vega::VegaLiteSpec;

use crate::columns::ColumnPartitions;

/// Inputs available to a rule builder during one generation call.
pub(crate) struct RuleContext<'a> {
    pub rows: &'a [Row],
    pub cols: &'a ColumnPartitions,
}

impl RuleContext<'_> {
    /// Dataset clone for embedding as the spec's inline data.
    pub(crate) fn data(&self) -> Vec<Row> {
        self.rows.to_vec()
    }
}

/// A suggestion before the generator assigns its id.
pub(crate) struct Draft {
    pub title: String,
    pub chart_kind: &'static str,
    pub rationale: String,
    pub columns_used: Vec<String>,
    pub alternatives: Vec<String>,
    pub render_spec: VegaLiteSpec,
    pub caveat: Option<String>,
}

/// One catalog entry: eligibility gate plus suggestion builder.
pub(crate) struct ChartRule {
    pub gate: fn(&ColumnPartitions) -> bool,
    pub build: fn(&RuleContext<'_>) -> Option<Draft>,
}

/// The rule catalog, in evaluation order.
pub(crate) const CATALOG: &[ChartRule] = &[
    ChartRule {
        gate: |c| c.numeric.len() >= 2 && !c.categorical.is_empty(),
        build: comparison::bubble_chart,
    },
    ChartRule {
        gate: |c| c.categorical.len() >= 2 && !c.numeric.is_empty(),
        build: distribution::heatmap,
    },
    ChartRule {
        gate: |c| c.categorical.len() >= 2 && !c.numeric.is_empty(),
        build: composition::stacked_bar_chart,
    },
    ChartRule {
        gate: |c| !c.datetime.is_empty() && !c.numeric.is_empty(),
        build: temporal::line_chart,
    },
    ChartRule {
        gate: |c| c.categorical.len() >= 2 && !c.numeric.is_empty(),
        build: comparison::grouped_bar_chart,
    },
    ChartRule {
        gate: |c| c.numeric.len() >= 2,
        build: comparison::scatter_plot,
    },
    ChartRule {
        gate: |c| !c.numeric.is_empty(),
        build: distribution::boxplot,
    },
    ChartRule {
        gate: |c| !c.categorical.is_empty() && !c.numeric.is_empty(),
        build: composition::donut_chart,
    },
    ChartRule {
        gate: |c| !c.numeric.is_empty(),
        build: distribution::histogram,
    },
    ChartRule {
        gate: |c| !c.datetime.is_empty() && !c.numeric.is_empty() && !c.categorical.is_empty(),
        build: temporal::stacked_area_chart,
    },
    ChartRule {
        gate: |c| !c.categorical.is_empty() && !c.numeric.is_empty(),
        build: comparison::bar_chart,
    },
    ChartRule {
        gate: |c| !c.numeric.is_empty(),
        build: distribution::density_plot,
    },
    ChartRule {
        gate: |c| !c.categorical.is_empty() && !c.numeric.is_empty(),
        build: composition::pie_chart,
    },
    ChartRule {
        gate: |c| !c.datetime.is_empty() && !c.numeric.is_empty(),
        build: temporal::area_chart,
    },
    ChartRule {
        gate: |c| c.categorical.len() >= 2 && !c.numeric.is_empty(),
        build: composition::percent_stacked_bar_chart,
    },
    ChartRule {
        gate: |c| !c.datetime.is_empty() && !c.numeric.is_empty() && !c.categorical.is_empty(),
        build: temporal::percent_stacked_area_chart,
    },
    ChartRule {
        gate: |c| !c.categorical.is_empty() && !c.numeric.is_empty(),
        build: comparison::radial_bar_chart,
    },
    ChartRule {
        gate: |c| c.categorical.len() >= 2 && !c.numeric.is_empty(),
        build: comparison::trellis_bar_chart,
    },
    ChartRule {
        gate: |c| !c.datetime.is_empty() && c.numeric.len() >= 2,
        build: temporal::dual_axis_chart,
    },
    ChartRule {
        gate: |c| !c.categorical.is_empty() && c.numeric.len() >= 2,
        build: comparison::pyramid_chart,
    },
];

#[cfg(test)]
mod tests {
    use plotsense_model::{ColumnKind, ColumnProfile};

    use super::*;

    #[test]
    fn catalog_has_twenty_rules() {
        assert_eq!(CATALOG.len(), 20);
    }

    #[test]
    fn every_builder_succeeds_when_its_gate_passes() {
        // A partition set rich enough to satisfy every gate; the rows can be
        // empty because builders only read column names from the partitions.
        let cols = ColumnPartitions::from_profiles(vec![
            ColumnProfile::new("n1", ColumnKind::Numeric, 5),
            ColumnProfile::new("n2", ColumnKind::Numeric, 5),
            ColumnProfile::new("c1", ColumnKind::Categorical, 3),
            ColumnProfile::new("c2", ColumnKind::Categorical, 3),
            ColumnProfile::new("d1", ColumnKind::Datetime, 5),
        ]);
        let ctx = RuleContext { rows: &[], cols: &cols };
        for (index, rule) in CATALOG.iter().enumerate() {
            assert!((rule.gate)(&cols), "gate {index} should pass");
            assert!((rule.build)(&ctx).is_some(), "builder {index} should build");
        }
    }
}

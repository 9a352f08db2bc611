//! Suggestion generation: catalog evaluation, diversity filtering, and
//! preference-based reordering.

use std::collections::BTreeSet;

use plotsense_model::Row;

use crate::catalog::{CATALOG, Draft, RuleContext};
use crate::classify::classify;
use crate::columns::ColumnPartitions;
use crate::types::ChartSuggestion;

/// Duplicate chart kinds are accepted freely until this many suggestions
/// exist; past it, only suggestions introducing a new kind get through. The
/// first six accepted suggestions are therefore guaranteed to be diverse.
const DIVERSITY_FREE_QUOTA: usize = 5;

/// Generate ranked chart suggestions for a dataset.
///
/// Classifies the columns, evaluates the rule catalog in its fixed order
/// against the kind partitions, applies the diversity filter, and assigns
/// dense sequential ids (`chart-1..chart-k`) at acceptance time. When
/// `preferred_style` is given, suggestions whose normalized kind matches it
/// are stably moved to the front and the resulting first suggestion gets a
/// match annotation; an unmatched hint changes nothing.
///
/// Pure and deterministic: identical inputs produce identical output, ids
/// included. Degenerate datasets yield an empty list, never an error.
pub fn generate(rows: &[Row], preferred_style: Option<&str>) -> Vec<ChartSuggestion> {
    let profiles = classify(rows);
    tracing::debug!(columns = profiles.len(), "classified dataset");
    let cols = ColumnPartitions::from_profiles(profiles);
    let ctx = RuleContext { rows, cols: &cols };

    let mut accumulator = Accumulator::default();
    for rule in CATALOG {
        if !(rule.gate)(&cols) {
            continue;
        }
        if let Some(draft) = (rule.build)(&ctx) {
            accumulator.add(draft);
        }
    }
    let mut suggestions = accumulator.suggestions;
    tracing::debug!(total = suggestions.len(), "generated suggestions");

    if let Some(style) = preferred_style {
        prioritize(&mut suggestions, style);
    }
    suggestions
}

/// Normalize a chart kind label for preference matching: lowercase, with the
/// first " chart"/" plot" occurrence removed ("Bar Chart" → "bar",
/// "Density Plot" → "density").
#[must_use]
pub fn normalize_kind(kind: &str) -> String {
    kind.to_lowercase()
        .replacen(" chart", "", 1)
        .replacen(" plot", "", 1)
}

/// Per-call accumulator backing the diversity filter and id sequence; never
/// shared across generation calls.
#[derive(Default)]
struct Accumulator {
    suggestions: Vec<ChartSuggestion>,
    used_kinds: BTreeSet<&'static str>,
}

impl Accumulator {
    fn add(&mut self, draft: Draft) {
        if self.used_kinds.contains(draft.chart_kind)
            && self.suggestions.len() > DIVERSITY_FREE_QUOTA
        {
            tracing::trace!(kind = draft.chart_kind, "dropped duplicate chart kind");
            return;
        }
        let id = format!("chart-{}", self.suggestions.len() + 1);
        self.used_kinds.insert(draft.chart_kind);
        self.suggestions.push(ChartSuggestion {
            id,
            title: draft.title,
            chart_kind: draft.chart_kind.to_owned(),
            rationale: draft.rationale,
            columns_used: draft.columns_used,
            alternatives: draft.alternatives,
            render_spec: draft.render_spec,
            caveat: draft.caveat,
        });
    }
}

/// Stable-partition matching suggestions to the front and annotate the new
/// first element when at least one matched.
fn prioritize(suggestions: &mut Vec<ChartSuggestion>, style: &str) {
    let target = normalize_kind(style);
    let (mut matched, rest): (Vec<_>, Vec<_>) = suggestions
        .drain(..)
        .partition(|suggestion| normalize_kind(&suggestion.chart_kind) == target);
    if let Some(first) = matched.first_mut() {
        first.caveat = Some(format!("Matches your uploaded {style} style!"));
    }
    matched.extend(rest);
    *suggestions = matched;
}

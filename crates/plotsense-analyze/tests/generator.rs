use std::collections::BTreeSet;

use plotsense_analyze::{classify, generate, normalize_kind};
use plotsense_model::{ColumnKind, Row, Value};

/// Five columns: one datetime, two categorical, two numeric.
fn rich_rows() -> Vec<Row> {
    let regions = ["North", "South", "East", "West"];
    let products = ["Gadget", "Widget"];
    (0..12)
        .map(|i| {
            let mut row = Row::new();
            row.insert("date", format!("2024-{:02}-01", i + 1));
            row.insert("region", regions[i % regions.len()]);
            row.insert("product", products[i % products.len()]);
            row.insert("sales", Value::Number(100.0 + i as f64 * 7.0));
            row.insert("profit", Value::Number(20.0 + i as f64 * 3.0));
            row
        })
        .collect()
}

/// Numeric and datetime columns only.
fn no_categorical_rows() -> Vec<Row> {
    (0..8)
        .map(|i| {
            let mut row = Row::new();
            row.insert("day", format!("2024-03-{:02}", i + 1));
            row.insert("visits", Value::Number(40.0 + i as f64));
            row.insert("signups", Value::Number(4.0 + i as f64));
            row
        })
        .collect()
}

#[test]
fn rich_dataset_classifies_as_expected() {
    let profiles = classify(&rich_rows());
    let kinds: Vec<(&str, ColumnKind)> = profiles
        .iter()
        .map(|p| (p.name.as_str(), p.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("date", ColumnKind::Datetime),
            ("region", ColumnKind::Categorical),
            ("product", ColumnKind::Categorical),
            ("sales", ColumnKind::Numeric),
            ("profit", ColumnKind::Numeric),
        ]
    );
}

#[test]
fn first_six_suggestions_are_diverse() {
    let suggestions = generate(&rich_rows(), None);
    assert!(suggestions.len() >= 6, "got {}", suggestions.len());
    let first_six: BTreeSet<&str> = suggestions[..6]
        .iter()
        .map(|s| s.chart_kind.as_str())
        .collect();
    assert_eq!(first_six.len(), 6);
}

#[test]
fn rich_dataset_fires_the_whole_catalog_in_order() {
    let suggestions = generate(&rich_rows(), None);
    let kinds: Vec<&str> = suggestions.iter().map(|s| s.chart_kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec![
            "Bubble Chart",
            "Heatmap",
            "Stacked Bar Chart",
            "Line Chart",
            "Grouped Bar Chart",
            "Scatter Plot",
            "Boxplot",
            "Donut Chart",
            "Histogram",
            "Stacked Area Chart",
            "Bar Chart",
            "Density Plot",
            "Pie Chart",
            "Area Chart",
            "100% Stacked Bar Chart",
            "100% Stacked Area Chart",
            "Radial Bar Chart",
            "Trellis Bar Chart",
            "Dual Axis Chart",
            "Pyramid Chart",
        ]
    );
}

#[test]
fn ids_are_dense_and_sequential() {
    let suggestions = generate(&rich_rows(), None);
    for (index, suggestion) in suggestions.iter().enumerate() {
        assert_eq!(suggestion.id, format!("chart-{}", index + 1));
    }
}

#[test]
fn generation_is_deterministic() {
    let rows = rich_rows();
    assert_eq!(generate(&rows, None), generate(&rows, None));
    assert_eq!(
        generate(&rows, Some("Bar Chart")),
        generate(&rows, Some("Bar Chart"))
    );
}

#[test]
fn preferred_style_moves_matches_to_front_and_annotates() {
    let rows = rich_rows();
    let plain = generate(&rows, None);
    let bar_position = plain
        .iter()
        .position(|s| s.chart_kind == "Bar Chart")
        .unwrap();
    assert!(bar_position > 0, "fixture must not already lead with bars");

    let preferred = generate(&rows, Some("Bar Chart"));
    assert_eq!(preferred[0].chart_kind, "Bar Chart");
    assert!(
        preferred[0]
            .caveat
            .as_deref()
            .unwrap()
            .contains("Matches your uploaded Bar Chart style!")
    );

    // Stable partition: non-matching suggestions keep their relative order.
    let rest: Vec<&str> = preferred[1..].iter().map(|s| s.chart_kind.as_str()).collect();
    let expected: Vec<&str> = plain
        .iter()
        .filter(|s| normalize_kind(&s.chart_kind) != "bar")
        .map(|s| s.chart_kind.as_str())
        .collect();
    assert_eq!(rest, expected);
}

#[test]
fn unmatched_preferred_style_is_a_no_op() {
    let rows = rich_rows();
    let plain = generate(&rows, None);
    let hinted = generate(&rows, Some("Nonexistent Chart"));
    assert_eq!(plain, hinted);
}

#[test]
fn categorical_gated_rules_stay_silent_without_categorical_columns() {
    let suggestions = generate(&no_categorical_rows(), None);
    assert!(!suggestions.is_empty());
    for gated in [
        "Heatmap",
        "Stacked Bar Chart",
        "Grouped Bar Chart",
        "Donut Chart",
        "Pie Chart",
        "Bar Chart",
        "Radial Bar Chart",
        "Trellis Bar Chart",
        "Pyramid Chart",
    ] {
        assert!(
            suggestions.iter().all(|s| s.chart_kind != gated),
            "{gated} requires a categorical column"
        );
    }
}

#[test]
fn empty_dataset_yields_no_suggestions() {
    assert!(generate(&[], None).is_empty());
    assert!(generate(&[], Some("Bar Chart")).is_empty());
}

#[test]
fn suggestions_embed_the_dataset_and_reference_real_columns() {
    let rows = rich_rows();
    let suggestions = generate(&rows, None);
    let column_names: BTreeSet<&str> = rows[0].columns().collect();
    for suggestion in &suggestions {
        let spec = serde_json::to_value(&suggestion.render_spec).unwrap();
        assert_eq!(
            spec["$schema"],
            serde_json::json!("https://vega.github.io/schema/vega-lite/v5.json")
        );
        assert_eq!(spec["data"]["values"].as_array().unwrap().len(), rows.len());
        for column in &suggestion.columns_used {
            assert!(
                column_names.contains(column.as_str()),
                "unknown column {column} in {}",
                suggestion.chart_kind
            );
        }
    }
}

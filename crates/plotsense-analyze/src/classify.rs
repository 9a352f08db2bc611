//! Heuristic column type classification.

use std::collections::BTreeSet;

use plotsense_model::{ColumnKind, ColumnProfile, Row, Value};

use crate::datetime::looks_like_date;

/// A column is NUMERIC when strictly more than this share of its defined
/// values parse as finite numbers; same threshold for DATETIME.
const NUMERIC_RATIO_MIN: f64 = 0.8;
const DATE_RATIO_MIN: f64 = 0.8;

/// Infer a [`ColumnProfile`] for every column of the dataset.
///
/// The column set is taken from the first row's keys, in source order; later
/// rows may omit or add keys without validation. Returns an empty vector for
/// an empty dataset.
///
/// Classification per column, in priority order:
/// 1. NUMERIC when the finite-number ratio over defined (non-null, non-empty)
///    values exceeds 0.8.
/// 2. DATETIME when the date-like ratio exceeds 0.8 *and* date-like values
///    outnumber numeric ones (the tie-break keeps ambiguous columns numeric).
/// 3. CATEGORICAL otherwise, including columns with no defined values at all.
///
/// [`ColumnKind::Boolean`] is reserved and never produced here.
///
/// This is a cheap heuristic meant to be rerun on the whole dataset whenever
/// it changes; there is no caching or incremental state.
pub fn classify(rows: &[Row]) -> Vec<ColumnProfile> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    first
        .columns()
        .map(|name| profile_column(name, rows))
        .collect()
}

fn profile_column(name: &str, rows: &[Row]) -> ColumnProfile {
    let defined: Vec<&Value> = rows
        .iter()
        .filter_map(|row| row.get(name))
        .filter(|value| !value.is_missing())
        .collect();

    let numeric_count = defined.iter().filter(|value| is_numeric(value)).count();
    let date_count = defined.iter().filter(|value| is_date_like(value)).count();
    let total = defined.len();

    let mut kind = ColumnKind::Categorical;
    if total > 0 {
        let numeric_ratio = numeric_count as f64 / total as f64;
        let date_ratio = date_count as f64 / total as f64;
        if numeric_ratio > NUMERIC_RATIO_MIN {
            kind = ColumnKind::Numeric;
        } else if date_ratio > DATE_RATIO_MIN && date_count > numeric_count {
            kind = ColumnKind::Datetime;
        }
    }

    ColumnProfile::new(name, kind, distinct_count(&defined))
}

/// True when the value denotes a finite real number.
fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_finite(),
        Value::Text(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        Value::Bool(_) | Value::Null => false,
    }
}

fn is_date_like(value: &Value) -> bool {
    value.as_text().is_some_and(looks_like_date)
}

/// Identity key for distinct counting: values collide only when both the
/// scalar type and the exact representation match. Numbers compare by bit
/// pattern; "1" the text and 1.0 the number stay distinct on purpose.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum DistinctKey<'a> {
    Bool(bool),
    Number(u64),
    Text(&'a str),
}

fn distinct_count(defined: &[&Value]) -> usize {
    let mut seen = BTreeSet::new();
    for value in defined {
        let key = match value {
            Value::Bool(b) => DistinctKey::Bool(*b),
            Value::Number(n) => DistinctKey::Number(n.to_bits()),
            Value::Text(s) => DistinctKey::Text(s),
            Value::Null => continue,
        };
        seen.insert(key);
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[Value]) -> Vec<Row> {
        values
            .iter()
            .map(|value| {
                let mut row = Row::new();
                row.insert("col", value.clone());
                row
            })
            .collect()
    }

    fn kind_of(values: &[Value]) -> ColumnKind {
        classify(&column(values))[0].kind
    }

    #[test]
    fn empty_dataset_has_no_profiles() {
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn numeric_text_column() {
        assert_eq!(
            kind_of(&["3".into(), "4".into(), "5".into()]),
            ColumnKind::Numeric
        );
    }

    #[test]
    fn datetime_column() {
        assert_eq!(
            kind_of(&["2024-01-01".into(), "2024-02-01".into()]),
            ColumnKind::Datetime
        );
    }

    #[test]
    fn spelled_out_month_names_classify_as_datetime() {
        assert_eq!(
            kind_of(&["January 5, 2024".into(), "5 February 2024".into()]),
            ColumnKind::Datetime
        );
    }

    #[test]
    fn categorical_column_with_distinct_count() {
        let profiles = classify(&column(&["red".into(), "blue".into(), "red".into()]));
        assert_eq!(profiles[0].kind, ColumnKind::Categorical);
        assert_eq!(profiles[0].distinct_count, 2);
    }

    #[test]
    fn exactly_eighty_percent_numeric_is_not_numeric() {
        // 4 of 5 numeric: ratio is exactly 0.8, and the threshold is strict.
        let kind = kind_of(&["1".into(), "2".into(), "3".into(), "4".into(), "x".into()]);
        assert_eq!(kind, ColumnKind::Categorical);
    }

    #[test]
    fn column_with_no_defined_values_defaults_to_categorical() {
        let profiles = classify(&column(&[Value::Null, Value::Text(String::new())]));
        assert_eq!(profiles[0].kind, ColumnKind::Categorical);
        assert_eq!(profiles[0].distinct_count, 0);
    }

    #[test]
    fn missing_values_are_excluded_from_counts() {
        let profiles = classify(&column(&[
            "7".into(),
            Value::Null,
            "8".into(),
            Value::Text(String::new()),
            "7".into(),
        ]));
        assert_eq!(profiles[0].kind, ColumnKind::Numeric);
        assert_eq!(profiles[0].distinct_count, 2);
    }

    #[test]
    fn booleans_are_neither_numeric_nor_dates() {
        assert_eq!(
            kind_of(&[true.into(), false.into(), true.into()]),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn number_and_text_representations_stay_distinct() {
        let profiles = classify(&column(&[Value::Number(1.0), "1".into()]));
        assert_eq!(profiles[0].distinct_count, 2);
    }

    #[test]
    fn profiles_follow_first_row_column_order() {
        let mut first = Row::new();
        first.insert("b", "x");
        first.insert("a", 1i64);
        let mut second = Row::new();
        second.insert("a", 2i64);
        second.insert("extra", "ignored");
        let profiles = classify(&[first, second]);
        let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn date_numeric_tie_break_prefers_numeric() {
        // Every value is numeric; even if some also looked date-like, the
        // numeric branch is checked first.
        assert_eq!(
            kind_of(&["2021".into(), "2022".into(), "2023".into()]),
            ColumnKind::Numeric
        );
    }
}

use proptest::prelude::*;

use plotsense_analyze::{classify, generate};
use plotsense_model::{Row, Value};

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000.0f64..1000.0).prop_map(Value::Number),
        "[a-z0-9/-]{0,12}".prop_map(Value::Text),
    ]
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    let columns = ["a", "b", "c"];
    proptest::collection::vec(
        proptest::collection::vec(value_strategy(), columns.len()),
        0..40,
    )
    .prop_map(move |rows| {
        rows.into_iter()
            .map(|values| {
                columns
                    .iter()
                    .zip(values)
                    .map(|(name, value)| ((*name).to_owned(), value))
                    .collect::<Row>()
            })
            .collect()
    })
}

fn defined_count(rows: &[Row], column: &str) -> usize {
    rows.iter()
        .filter_map(|row| row.get(column))
        .filter(|value| !value.is_missing())
        .count()
}

proptest! {
    #[test]
    fn one_profile_per_first_row_column(rows in rows_strategy()) {
        let profiles = classify(&rows);
        match rows.first() {
            Some(first) => {
                let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
                let expected: Vec<&str> = first.columns().collect();
                prop_assert_eq!(names, expected);
            }
            None => prop_assert!(profiles.is_empty()),
        }
    }

    #[test]
    fn distinct_is_bounded_by_defined_and_row_count(rows in rows_strategy()) {
        for profile in classify(&rows) {
            let defined = defined_count(&rows, &profile.name);
            prop_assert!(profile.distinct_count <= defined);
            prop_assert!(defined <= rows.len());
        }
    }

    #[test]
    fn classification_and_generation_never_panic_and_are_deterministic(
        rows in rows_strategy(),
        style in proptest::option::of("[A-Za-z ]{0,16}"),
    ) {
        let first = generate(&rows, style.as_deref());
        let second = generate(&rows, style.as_deref());
        prop_assert_eq!(first, second);
    }
}

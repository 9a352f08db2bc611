//! Column partitioning and positional slot access.

use plotsense_model::{ColumnKind, ColumnProfile};

/// Column profiles partitioned by kind, preserving source column order.
///
/// Chart rules address columns positionally ("second categorical column"),
/// so the slot accessors guard out-of-range indices by falling back to the
/// first column of the partition instead of faulting. `Boolean` columns
/// participate in no partition; no rule consumes them.
#[derive(Debug, Clone, Default)]
pub struct ColumnPartitions {
    pub numeric: Vec<ColumnProfile>,
    pub categorical: Vec<ColumnProfile>,
    pub datetime: Vec<ColumnProfile>,
}

impl ColumnPartitions {
    #[must_use]
    pub fn from_profiles(profiles: Vec<ColumnProfile>) -> Self {
        let mut partitions = Self::default();
        for profile in profiles {
            match profile.kind {
                ColumnKind::Numeric => partitions.numeric.push(profile),
                ColumnKind::Categorical => partitions.categorical.push(profile),
                ColumnKind::Datetime => partitions.datetime.push(profile),
                ColumnKind::Boolean => {}
            }
        }
        partitions
    }

    /// Numeric column at `index`, or the first numeric column when the index
    /// is out of range. `None` only when the partition is empty.
    #[must_use]
    pub fn numeric_slot(&self, index: usize) -> Option<&ColumnProfile> {
        slot(&self.numeric, index)
    }

    #[must_use]
    pub fn categorical_slot(&self, index: usize) -> Option<&ColumnProfile> {
        slot(&self.categorical, index)
    }

    #[must_use]
    pub fn datetime_slot(&self, index: usize) -> Option<&ColumnProfile> {
        slot(&self.datetime, index)
    }

    /// First categorical column with fewer than `max_distinct` distinct
    /// values, falling back to the first categorical column. Part-to-whole
    /// charts prefer low-cardinality slices.
    #[must_use]
    pub fn compact_categorical(&self, max_distinct: usize) -> Option<&ColumnProfile> {
        self.categorical
            .iter()
            .find(|profile| profile.distinct_count < max_distinct)
            .or_else(|| self.categorical.first())
    }
}

fn slot<'a>(partition: &'a [ColumnProfile], index: usize) -> Option<&'a ColumnProfile> {
    partition.get(index).or_else(|| partition.first())
}

#[cfg(test)]
mod tests {
    use plotsense_model::ColumnKind;

    use super::*;

    fn profile(name: &str, kind: ColumnKind, distinct: usize) -> ColumnProfile {
        ColumnProfile::new(name, kind, distinct)
    }

    fn partitions() -> ColumnPartitions {
        ColumnPartitions::from_profiles(vec![
            profile("region", ColumnKind::Categorical, 12),
            profile("sales", ColumnKind::Numeric, 40),
            profile("day", ColumnKind::Datetime, 40),
            profile("segment", ColumnKind::Categorical, 4),
            profile("flag", ColumnKind::Boolean, 2),
        ])
    }

    #[test]
    fn partitions_keep_source_order_and_skip_boolean() {
        let cols = partitions();
        assert_eq!(cols.numeric.len(), 1);
        assert_eq!(cols.datetime.len(), 1);
        let cats: Vec<&str> = cols.categorical.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(cats, vec!["region", "segment"]);
    }

    #[test]
    fn out_of_range_slot_falls_back_to_first() {
        let cols = partitions();
        assert_eq!(cols.categorical_slot(1).unwrap().name, "segment");
        assert_eq!(cols.categorical_slot(5).unwrap().name, "region");
        assert!(ColumnPartitions::default().numeric_slot(0).is_none());
    }

    #[test]
    fn compact_categorical_prefers_low_cardinality() {
        let cols = partitions();
        assert_eq!(cols.compact_categorical(8).unwrap().name, "segment");
        assert_eq!(cols.compact_categorical(2).unwrap().name, "region");
    }
}

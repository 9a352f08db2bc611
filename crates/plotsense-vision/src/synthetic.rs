//! Synthetic preview datasets shaped like a detected chart's typical input.

use plotsense_model::{Row, Value};

const CATEGORIES: &[&str] = &["Electronics", "Apparel", "Home Decor", "Books", "Sports"];
const REGIONS: &[&str] = &["North", "South", "Central", "Coast", "Mountain"];

const SCATTER_POINTS: usize = 30;

/// Build sample rows whose columns fit the given chart label.
///
/// Deterministic for a given `(label, seed)` pair: the PRNG below replaces
/// ad-hoc randomness so previews are stable across runs and testable.
pub(crate) fn sample_rows(label: &str, seed: u64) -> Vec<Row> {
    let needle = label.to_lowercase();
    let mut rng = XorShift64::new(seed);

    if ["bar", "column", "radial"].iter().any(|k| needle.contains(k)) {
        return CATEGORIES
            .iter()
            .map(|category| {
                let mut row = Row::new();
                row.insert("Category", *category);
                row.insert("Value", 200 + rng.below(1000) as i64);
                row.insert("Region", REGIONS[rng.below(REGIONS.len() as u64) as usize]);
                row
            })
            .collect();
    }

    if ["line", "area"].iter().any(|k| needle.contains(k)) {
        return (0..12i64)
            .map(|month| {
                let mut row = Row::new();
                row.insert("Date", format!("2025-{:02}-01T00:00:00Z", month + 1));
                row.insert("Value", rng.below(500) as i64 + month * 20);
                row.insert("Trend", rng.below(100) as i64);
                row
            })
            .collect();
    }

    if ["scatter", "bubble"].iter().any(|k| needle.contains(k)) {
        return (0..SCATTER_POINTS)
            .map(|id| {
                let mut row = Row::new();
                row.insert("id", id as i64);
                row.insert("X_Value", rng.below(100) as i64);
                row.insert("Y_Value", rng.below(100) as i64);
                row.insert("Size", 10 + rng.below(50) as i64);
                row.insert("Group", CATEGORIES[id % CATEGORIES.len()]);
                row
            })
            .collect();
    }

    CATEGORIES
        .iter()
        .map(|category| {
            let mut row = Row::new();
            row.insert("Category", *category);
            row.insert("Value", Value::Number(rng.below(1000) as f64));
            row
        })
        .collect()
}

/// xorshift64* — tiny, seedable, plenty for preview data.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        // The generator degenerates on a zero state.
        let state = seed ^ 0x9E37_79B9_7F4A_7C15;
        Self {
            state: if state == 0 { 0x9E37_79B9_7F4A_7C15 } else { state },
        }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic column type inferred by the classifier.
///
/// `Boolean` is part of the type domain for forward compatibility but the
/// current classifier never emits it; no chart rule consumes it either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
    Datetime,
    Boolean,
}

impl ColumnKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
            ColumnKind::Datetime => "datetime",
            ColumnKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name as it appears in the source data.
    pub name: String,
    /// Inferred semantic type.
    pub kind: ColumnKind,
    /// Number of distinct non-missing values.
    pub distinct_count: usize,
}

impl ColumnProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ColumnKind, distinct_count: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            distinct_count,
        }
    }
}

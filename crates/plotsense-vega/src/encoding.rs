use serde::ser::Serializer;
use serde::Serialize;

/// Measurement type of an encoded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Nominal,
    Temporal,
}

/// Aggregation applied to a field within an encoding channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Sum,
    Mean,
    Count,
}

/// Sort directive for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sort {
    /// Sort by the y channel, descending (`"-y"`).
    #[serde(rename = "-y")]
    ByYDescending,
    #[serde(rename = "descending")]
    Descending,
}

/// Stacking directive; serializes as `"normalize"` or the literal `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stack {
    Normalize,
    Stacked,
}

impl Serialize for Stack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Stack::Normalize => serializer.serialize_str("normalize"),
            Stack::Stacked => serializer.serialize_bool(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Sqrt,
}

/// Scale overrides on a channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_min: Option<f64>,
}

/// Serializes as a literal JSON `null`.
///
/// Vega-Lite distinguishes an absent `axis`/`legend` (defaults apply) from an
/// explicit `null` (guide suppressed); this marker expresses the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disabled;

impl Serialize for Disabled {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

/// A single encoding channel definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Stack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Disabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Disabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Channel {
    /// Channel bound to a field with an explicit measurement type.
    #[must_use]
    pub fn field(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: Some(name.into()),
            field_type: Some(field_type),
            ..Self::default()
        }
    }

    /// Channel bound to a field, leaving the type to Vega-Lite inference.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            field: Some(name.into()),
            ..Self::default()
        }
    }

    /// Channel fixed to a literal value (e.g. a color).
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// `{"aggregate": "count"}` channel with no field.
    #[must_use]
    pub fn count() -> Self {
        Self {
            aggregate: Some(Aggregate::Count),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_aggregate(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = Some(aggregate);
        self
    }

    #[must_use]
    pub fn binned(mut self) -> Self {
        self.bin = Some(true);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: Stack) -> Self {
        self.stack = Some(stack);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn without_axis(mut self) -> Self {
        self.axis = Some(Disabled);
        self
    }

    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.legend = Some(Disabled);
        self
    }
}

/// The encoding block: one optional definition per channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_offset: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Channel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_channel_shape() {
        let channel = Channel::field("sales", FieldType::Quantitative)
            .with_aggregate(Aggregate::Sum)
            .with_stack(Stack::Normalize);
        let json = serde_json::to_value(channel).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "sales",
                "type": "quantitative",
                "aggregate": "sum",
                "stack": "normalize",
            })
        );
    }

    #[test]
    fn disabled_legend_serializes_as_null() {
        let channel = Channel::bare("region").without_legend();
        let json = serde_json::to_string(&channel).unwrap();
        assert_eq!(json, r#"{"field":"region","legend":null}"#);
    }

    #[test]
    fn stacked_flag_serializes_as_true() {
        let channel = Channel::field("v", FieldType::Quantitative).with_stack(Stack::Stacked);
        let json = serde_json::to_value(channel).unwrap();
        assert_eq!(json["stack"], serde_json::json!(true));
    }

    #[test]
    fn sort_by_y_descending_is_dash_y() {
        assert_eq!(serde_json::to_string(&Sort::ByYDescending).unwrap(), "\"-y\"");
    }

    #[test]
    fn x_offset_key_is_camel_case() {
        let encoding = Encoding {
            x_offset: Some(Channel::bare("group")),
            ..Encoding::default()
        };
        let json = serde_json::to_value(encoding).unwrap();
        assert_eq!(json, serde_json::json!({"xOffset": {"field": "group"}}));
    }
}

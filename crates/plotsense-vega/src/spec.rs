use serde::Serialize;

use plotsense_model::Row;

use crate::encoding::{Disabled, Encoding};
use crate::mark::Mark;

/// Schema URL stamped on every emitted spec.
pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Inline data block: the dataset rows embedded directly in the spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineData {
    pub values: Vec<Row>,
}

/// The transforms the rule catalog uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Transform {
    /// Kernel density estimate over a quantitative field; produces the
    /// synthetic `value`/`density` fields consumed by the encoding.
    Density { density: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    Independent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScaleResolve {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<ResolveMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolve {
    pub scale: ScaleResolve,
}

impl Resolve {
    /// Give each layer its own y scale.
    #[must_use]
    pub fn independent_y() -> Self {
        Self {
            scale: ScaleResolve {
                y: Some(ResolveMode::Independent),
            },
        }
    }
}

/// Per-view style overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ViewConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Disabled>,
}

impl ViewConfig {
    /// `{"stroke": null}` — remove the view border.
    #[must_use]
    pub fn borderless() -> Self {
        Self {
            stroke: Some(Disabled),
        }
    }
}

/// A sub-view inside `layer` or `hconcat`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
}

impl UnitSpec {
    #[must_use]
    pub fn new(mark: impl Into<Mark>) -> Self {
        Self {
            mark: Some(mark.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}

/// Top-level Vega-Lite specification with inline data.
///
/// Exactly one of `mark`, `layer`, or `hconcat` carries the view structure;
/// the builders on [`VegaLiteSpec`] leave the unused ones empty so they are
/// omitted from the serialized output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VegaLiteSpec {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub data: InlineData,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layer: Vec<UnitSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hconcat: Vec<UnitSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve: Option<Resolve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
}

impl VegaLiteSpec {
    /// Empty spec bound to `rows`; combine with the builder methods.
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            schema: VEGA_LITE_SCHEMA,
            data: InlineData { values: rows },
            transform: Vec::new(),
            mark: None,
            encoding: None,
            layer: Vec::new(),
            hconcat: Vec::new(),
            resolve: None,
            spacing: None,
        }
    }

    #[must_use]
    pub fn with_mark(mut self, mark: impl Into<Mark>) -> Self {
        self.mark = Some(mark.into());
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform.push(transform);
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Vec<UnitSpec>) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn with_hconcat(mut self, hconcat: Vec<UnitSpec>) -> Self {
        self.hconcat = hconcat;
        self
    }

    #[must_use]
    pub fn with_resolve(mut self, resolve: Resolve) -> Self {
        self.resolve = Some(resolve);
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }
}

#[cfg(test)]
mod tests {
    use plotsense_model::Value;

    use super::*;
    use crate::encoding::{Channel, FieldType};
    use crate::mark::MarkType;

    fn one_row() -> Vec<Row> {
        let mut row = Row::new();
        row.insert("region", Value::Text("North".into()));
        row.insert("sales", Value::Number(10.0));
        vec![row]
    }

    #[test]
    fn minimal_bar_spec_shape() {
        let spec = VegaLiteSpec::new(one_row())
            .with_mark(MarkType::Bar)
            .with_encoding(Encoding {
                x: Some(Channel::field("region", FieldType::Nominal)),
                y: Some(Channel::field("sales", FieldType::Quantitative)),
                ..Encoding::default()
            });
        let json = serde_json::to_value(spec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
                "data": {"values": [{"region": "North", "sales": 10.0}]},
                "mark": "bar",
                "encoding": {
                    "x": {"field": "region", "type": "nominal"},
                    "y": {"field": "sales", "type": "quantitative"},
                },
            })
        );
    }

    #[test]
    fn density_transform_shape() {
        let spec = VegaLiteSpec::new(one_row()).with_transform(Transform::Density {
            density: "sales".into(),
        });
        let json = serde_json::to_value(spec).unwrap();
        assert_eq!(json["transform"], serde_json::json!([{"density": "sales"}]));
    }

    #[test]
    fn layered_spec_resolves_independent_y() {
        let spec = VegaLiteSpec::new(one_row())
            .with_layer(vec![UnitSpec::new(MarkType::Line)])
            .with_resolve(Resolve::independent_y());
        let json = serde_json::to_value(spec).unwrap();
        assert_eq!(
            json["resolve"],
            serde_json::json!({"scale": {"y": "independent"}})
        );
        assert_eq!(json["layer"], serde_json::json!([{"mark": "line"}]));
        assert!(json.get("mark").is_none());
        assert!(json.get("hconcat").is_none());
    }
}

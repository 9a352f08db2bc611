use serde::Serialize;

/// Graphical mark primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Bar,
    Line,
    Area,
    Arc,
    Rect,
    Circle,
    Boxplot,
    Text,
}

/// Mark with styling properties, serialized as a mark definition object.
///
/// Only the properties the rule catalog actually sets are modeled; each is
/// omitted from the output when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkDef {
    #[serde(rename = "type")]
    pub mark: MarkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius_end: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl MarkDef {
    #[must_use]
    pub fn new(mark: MarkType) -> Self {
        Self {
            mark,
            tooltip: None,
            point: None,
            corner_radius_end: None,
            inner_radius: None,
            outer_radius: None,
            extent: None,
            stroke: None,
            color: None,
            radius_offset: None,
            align: None,
        }
    }
}

/// A mark position in a spec: either the bare mark name or a full
/// definition object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Mark {
    Simple(MarkType),
    Def(MarkDef),
}

impl From<MarkType> for Mark {
    fn from(mark: MarkType) -> Self {
        Mark::Simple(mark)
    }
}

impl From<MarkDef> for Mark {
    fn from(def: MarkDef) -> Self {
        Mark::Def(def)
    }
}

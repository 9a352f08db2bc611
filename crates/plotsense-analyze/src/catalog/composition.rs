//! Part-to-whole and composition rules.

use plotsense_vega::{
    Aggregate, Channel, Encoding, FieldType, MarkDef, MarkType, Stack, VegaLiteSpec,
};

use super::{Draft, RuleContext};

/// Part-to-whole charts get unreadable past this many slices.
const DONUT_MAX_SLICES: usize = 8;
const PIE_MAX_SLICES: usize = 6;

pub(crate) fn stacked_bar_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let c0 = ctx.cols.categorical_slot(0)?;
    let c1 = ctx.cols.categorical_slot(1)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: format!("Composition by {}", c0.name),
        chart_kind: "Stacked Bar Chart",
        rationale: format!("Breakdown of {} by {} subdivisions.", n0.name, c0.name),
        columns_used: vec![c0.name.clone(), c1.name.clone(), n0.name.clone()],
        alternatives: vec!["Grouped Bar Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkDef {
                tooltip: Some(true),
                ..MarkDef::new(MarkType::Bar)
            })
            .with_encoding(Encoding {
                x: Some(Channel::field(&c0.name, FieldType::Nominal)),
                y: Some(
                    Channel::field(&n0.name, FieldType::Quantitative)
                        .with_aggregate(Aggregate::Sum),
                ),
                color: Some(Channel::field(&c1.name, FieldType::Nominal)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn donut_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let cat = ctx.cols.compact_categorical(DONUT_MAX_SLICES)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: format!("{} Share", cat.name),
        chart_kind: "Donut Chart",
        rationale: format!("Market share/proportion of {}.", cat.name),
        columns_used: vec![cat.name.clone(), n0.name.clone()],
        alternatives: vec!["Bar Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkDef {
                inner_radius: Some(50.0),
                ..MarkDef::new(MarkType::Arc)
            })
            .with_encoding(Encoding {
                theta: Some(Channel::bare(&n0.name).with_aggregate(Aggregate::Sum)),
                color: Some(Channel::field(&cat.name, FieldType::Nominal)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn pie_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let cat = ctx.cols.compact_categorical(PIE_MAX_SLICES)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: format!("{} Distribution", cat.name),
        chart_kind: "Pie Chart",
        rationale: format!("Classic part-to-whole comparison for {}.", cat.name),
        columns_used: vec![cat.name.clone(), n0.name.clone()],
        alternatives: vec!["Donut Chart".into(), "Bar Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkDef {
                outer_radius: Some(80.0),
                ..MarkDef::new(MarkType::Arc)
            })
            .with_encoding(Encoding {
                theta: Some(Channel::bare(&n0.name).with_aggregate(Aggregate::Sum)),
                color: Some(Channel::field(&cat.name, FieldType::Nominal)),
                ..Encoding::default()
            }),
        caveat: Some("Hard to compare slice sizes accurately.".into()),
    })
}

pub(crate) fn percent_stacked_bar_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let c0 = ctx.cols.categorical_slot(0)?;
    let c1 = ctx.cols.categorical_slot(1)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: format!("Relative Proportions by {}", c0.name),
        chart_kind: "100% Stacked Bar Chart",
        rationale: format!(
            "Compare relative percentage of {} within each {}.",
            c1.name, c0.name
        ),
        columns_used: vec![c0.name.clone(), c1.name.clone(), n0.name.clone()],
        alternatives: vec!["Stacked Bar Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkType::Bar)
            .with_encoding(Encoding {
                x: Some(Channel::field(&c0.name, FieldType::Nominal)),
                y: Some(
                    Channel::field(&n0.name, FieldType::Quantitative)
                        .with_aggregate(Aggregate::Sum)
                        .with_stack(Stack::Normalize),
                ),
                color: Some(Channel::bare(&c1.name)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

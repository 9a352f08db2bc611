//! Time-series rules; all require at least one datetime column.

use plotsense_vega::{
    Channel, Encoding, FieldType, MarkDef, MarkType, Resolve, Stack, UnitSpec, VegaLiteSpec,
};

use super::{Draft, RuleContext};

pub(crate) fn line_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let d0 = ctx.cols.datetime_slot(0)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    let cat = ctx.cols.categorical_slot(0);
    let mut columns_used = vec![d0.name.clone(), n0.name.clone()];
    if let Some(c0) = cat {
        columns_used.push(c0.name.clone());
    }
    Some(Draft {
        title: "Trend over Time".into(),
        chart_kind: "Line Chart",
        rationale: format!("Temporal evolution of {}.", n0.name),
        columns_used,
        alternatives: vec!["Area Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkDef {
                point: Some(true),
                ..MarkDef::new(MarkType::Line)
            })
            .with_encoding(Encoding {
                x: Some(Channel::field(&d0.name, FieldType::Temporal)),
                y: Some(Channel::field(&n0.name, FieldType::Quantitative)),
                color: cat.map(|c0| Channel::field(&c0.name, FieldType::Nominal)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn stacked_area_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let d0 = ctx.cols.datetime_slot(0)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    let c0 = ctx.cols.categorical_slot(0)?;
    Some(Draft {
        title: "Volume Trends by Category".into(),
        chart_kind: "Stacked Area Chart",
        rationale: format!("Evolution of {} breakdown over time.", n0.name),
        columns_used: vec![d0.name.clone(), n0.name.clone(), c0.name.clone()],
        alternatives: vec!["Streamgraph".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkType::Area)
            .with_encoding(Encoding {
                x: Some(Channel::field(&d0.name, FieldType::Temporal)),
                y: Some(
                    Channel::field(&n0.name, FieldType::Quantitative)
                        .with_stack(Stack::Normalize),
                ),
                color: Some(Channel::bare(&c0.name)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn area_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let d0 = ctx.cols.datetime_slot(0)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: "Volume over Time".into(),
        chart_kind: "Area Chart",
        rationale: format!(
            "Emphasizes the magnitude of change in {} over time.",
            n0.name
        ),
        columns_used: vec![d0.name.clone(), n0.name.clone()],
        alternatives: vec!["Line Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkType::Area)
            .with_encoding(Encoding {
                x: Some(Channel::field(&d0.name, FieldType::Temporal)),
                y: Some(Channel::field(&n0.name, FieldType::Quantitative)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn percent_stacked_area_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let d0 = ctx.cols.datetime_slot(0)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    let c0 = ctx.cols.categorical_slot(0)?;
    Some(Draft {
        title: "Relative Trend Contribution".into(),
        chart_kind: "100% Stacked Area Chart",
        rationale: format!(
            "Show how the contribution of each {} changes over time (normalized).",
            c0.name
        ),
        columns_used: vec![d0.name.clone(), n0.name.clone(), c0.name.clone()],
        alternatives: vec!["Stacked Area Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkType::Area)
            .with_encoding(Encoding {
                x: Some(Channel::field(&d0.name, FieldType::Temporal)),
                y: Some(
                    Channel::field(&n0.name, FieldType::Quantitative)
                        .with_stack(Stack::Normalize),
                ),
                color: Some(Channel::bare(&c0.name)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn dual_axis_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let d0 = ctx.cols.datetime_slot(0)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    let n1 = ctx.cols.numeric_slot(1)?;
    Some(Draft {
        title: format!("Dual Metrics: {} & {}", n0.name, n1.name),
        chart_kind: "Dual Axis Chart",
        rationale: format!(
            "Compare trends of two different scales ({} and {}) over time.",
            n0.name, n1.name
        ),
        columns_used: vec![d0.name.clone(), n0.name.clone(), n1.name.clone()],
        alternatives: vec!["Line Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_encoding(Encoding {
                x: Some(Channel::field(&d0.name, FieldType::Temporal)),
                ..Encoding::default()
            })
            .with_layer(vec![
                UnitSpec::new(MarkDef {
                    color: Some("#10b981".into()),
                    ..MarkDef::new(MarkType::Line)
                })
                .with_encoding(Encoding {
                    y: Some(Channel::field(&n0.name, FieldType::Quantitative)),
                    ..Encoding::default()
                }),
                UnitSpec::new(MarkDef {
                    color: Some("#3b82f6".into()),
                    ..MarkDef::new(MarkType::Line)
                })
                .with_encoding(Encoding {
                    y: Some(Channel::field(&n1.name, FieldType::Quantitative)),
                    ..Encoding::default()
                }),
            ])
            .with_resolve(Resolve::independent_y()),
        caveat: None,
    })
}

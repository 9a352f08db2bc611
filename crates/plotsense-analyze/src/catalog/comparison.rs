//! Rules that compare magnitudes across items or series.

use plotsense_vega::{
    Aggregate, Channel, Encoding, FieldType, MarkDef, MarkType, Scale, ScaleType, Sort, Stack,
    UnitSpec, VegaLiteSpec, ViewConfig,
};

use super::{Draft, RuleContext};

pub(crate) fn bubble_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let n0 = ctx.cols.numeric_slot(0)?;
    let n1 = ctx.cols.numeric_slot(1)?;
    let size = ctx.cols.numeric_slot(2)?;
    let c0 = ctx.cols.categorical_slot(0)?;
    Some(Draft {
        title: format!("Multivariate Analysis: {} vs {}", n0.name, n1.name),
        chart_kind: "Bubble Chart",
        rationale: format!(
            "high-dimensional view relating {}, {}, and {}.",
            n0.name, n1.name, c0.name
        ),
        columns_used: vec![
            n0.name.clone(),
            n1.name.clone(),
            size.name.clone(),
            c0.name.clone(),
        ],
        alternatives: vec!["Scatter Plot".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkType::Circle)
            .with_encoding(Encoding {
                x: Some(Channel::field(&n0.name, FieldType::Quantitative)),
                y: Some(Channel::field(&n1.name, FieldType::Quantitative)),
                size: Some(Channel::field(&size.name, FieldType::Quantitative)),
                color: Some(Channel::field(&c0.name, FieldType::Nominal)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn grouped_bar_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let c0 = ctx.cols.categorical_slot(0)?;
    let c1 = ctx.cols.categorical_slot(1)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: "Side-by-Side Comparison".into(),
        chart_kind: "Grouped Bar Chart",
        rationale: format!("Direct comparison of {} across groups.", n0.name),
        columns_used: vec![c0.name.clone(), c1.name.clone(), n0.name.clone()],
        alternatives: vec!["Stacked Bar Chart".into()],
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
                x_offset: Some(Channel::bare(&c1.name)),
                color: Some(Channel::bare(&c1.name)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn scatter_plot(ctx: &RuleContext<'_>) -> Option<Draft> {
    let n0 = ctx.cols.numeric_slot(0)?;
    let n1 = ctx.cols.numeric_slot(1)?;
    let no_zero = Scale {
        zero: Some(false),
        ..Scale::default()
    };
    Some(Draft {
        title: format!("{} vs {}", n0.name, n1.name),
        chart_kind: "Scatter Plot",
        rationale: format!("Correlation between {} and {}.", n0.name, n1.name),
        columns_used: vec![n0.name.clone(), n1.name.clone()],
        alternatives: vec!["Bubble Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkType::Circle)
            .with_encoding(Encoding {
                x: Some(Channel::field(&n0.name, FieldType::Quantitative).with_scale(no_zero)),
                y: Some(Channel::field(&n1.name, FieldType::Quantitative).with_scale(no_zero)),
                color: ctx
                    .cols
                    .categorical_slot(0)
                    .map(|c0| Channel::bare(&c0.name)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn bar_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let c0 = ctx.cols.categorical_slot(0)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: format!("{} by {}", n0.name, c0.name),
        chart_kind: "Bar Chart",
        rationale: format!("Simple comparison of {}.", n0.name),
        columns_used: vec![c0.name.clone(), n0.name.clone()],
        alternatives: vec!["Lollipop Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkDef {
                corner_radius_end: Some(4.0),
                ..MarkDef::new(MarkType::Bar)
            })
            .with_encoding(Encoding {
                x: Some(Channel::field(&c0.name, FieldType::Nominal).with_sort(Sort::ByYDescending)),
                y: Some(Channel::field(&n0.name, FieldType::Quantitative)),
                color: Some(Channel::bare(&c0.name).without_legend()),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn radial_bar_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let c0 = ctx.cols.categorical_slot(0)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: format!("Radial View: {}", n0.name),
        chart_kind: "Radial Bar Chart",
        rationale: format!(
            "Aesthetic variation for comparing {} by {}.",
            n0.name, c0.name
        ),
        columns_used: vec![c0.name.clone(), n0.name.clone()],
        alternatives: vec!["Bar Chart".into(), "Donut Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_layer(vec![
                UnitSpec::new(MarkDef {
                    inner_radius: Some(20.0),
                    stroke: Some("#fff".into()),
                    ..MarkDef::new(MarkType::Arc)
                }),
                UnitSpec::new(MarkDef {
                    radius_offset: Some(10.0),
                    ..MarkDef::new(MarkType::Text)
                })
                .with_encoding(Encoding {
                    text: Some(Channel::field(&n0.name, FieldType::Quantitative)),
                    color: Some(Channel::literal("black")),
                    ..Encoding::default()
                }),
            ])
            .with_encoding(Encoding {
                theta: Some(
                    Channel::field(&n0.name, FieldType::Quantitative).with_stack(Stack::Stacked),
                ),
                radius: Some(Channel::bare(&n0.name).with_scale(Scale {
                    scale_type: Some(ScaleType::Sqrt),
                    zero: Some(true),
                    range_min: Some(20.0),
                })),
                color: Some(Channel::field(&c0.name, FieldType::Nominal).without_legend()),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn trellis_bar_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let c0 = ctx.cols.categorical_slot(0)?;
    let c1 = ctx.cols.categorical_slot(1)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: format!("Distribution across {}", c1.name),
        chart_kind: "Trellis Bar Chart",
        rationale: format!(
            "Small multiples to compare {} by {} for each {}.",
            n0.name, c0.name, c1.name
        ),
        columns_used: vec![c0.name.clone(), c1.name.clone(), n0.name.clone()],
        alternatives: vec!["Grouped Bar Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkType::Bar)
            .with_encoding(Encoding {
                x: Some(Channel::field(&c0.name, FieldType::Nominal)),
                y: Some(
                    Channel::field(&n0.name, FieldType::Quantitative)
                        .with_aggregate(Aggregate::Sum),
                ),
                color: Some(Channel::bare(&c0.name).without_legend()),
                row: Some(Channel::bare(&c1.name)),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn pyramid_chart(ctx: &RuleContext<'_>) -> Option<Draft> {
    let c0 = ctx.cols.categorical_slot(0)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    let n1 = ctx.cols.numeric_slot(1)?;
    Some(Draft {
        title: "Population Pyramid Style".into(),
        chart_kind: "Pyramid Chart",
        rationale: format!(
            "Compare distributions of {} and {} side-by-side.",
            n0.name, n1.name
        ),
        columns_used: vec![c0.name.clone(), n0.name.clone(), n1.name.clone()],
        alternatives: vec!["Grouped Bar Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_spacing(0.0)
            .with_hconcat(vec![
                UnitSpec {
                    title: Some(n0.name.clone()),
                    ..UnitSpec::new(MarkDef {
                        color: Some("#ef4444".into()),
                        ..MarkDef::new(MarkType::Bar)
                    })
                }
                .with_encoding(Encoding {
                    y: Some(Channel::bare(&c0.name).without_axis()),
                    x: Some(
                        Channel::bare(&n0.name)
                            .with_aggregate(Aggregate::Sum)
                            .with_sort(Sort::Descending),
                    ),
                    ..Encoding::default()
                }),
                UnitSpec {
                    width: Some(20.0),
                    view: Some(ViewConfig::borderless()),
                    ..UnitSpec::new(MarkDef {
                        align: Some("center".into()),
                        ..MarkDef::new(MarkType::Text)
                    })
                }
                .with_encoding(Encoding {
                    y: Some(Channel::field(&c0.name, FieldType::Nominal).without_axis()),
                    text: Some(Channel::bare(&c0.name)),
                    ..Encoding::default()
                }),
                UnitSpec {
                    title: Some(n1.name.clone()),
                    ..UnitSpec::new(MarkDef {
                        color: Some("#3b82f6".into()),
                        ..MarkDef::new(MarkType::Bar)
                    })
                }
                .with_encoding(Encoding {
                    y: Some(Channel::bare(&c0.name).without_axis()),
                    x: Some(Channel::bare(&n1.name).with_aggregate(Aggregate::Sum)),
                    ..Encoding::default()
                }),
            ]),
        caveat: None,
    })
}

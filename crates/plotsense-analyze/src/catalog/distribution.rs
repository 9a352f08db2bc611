//! Rules that show how values are distributed.

use plotsense_vega::{
    Aggregate, Channel, Encoding, FieldType, MarkDef, MarkType, Transform, VegaLiteSpec,
};

use super::{Draft, RuleContext};

pub(crate) fn heatmap(ctx: &RuleContext<'_>) -> Option<Draft> {
    let c0 = ctx.cols.categorical_slot(0)?;
    let c1 = ctx.cols.categorical_slot(1)?;
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: "Heatmap Distribution".into(),
        chart_kind: "Heatmap",
        rationale: format!(
            "Intensity of {} across {} and {}.",
            n0.name, c0.name, c1.name
        ),
        columns_used: vec![c0.name.clone(), c1.name.clone(), n0.name.clone()],
        alternatives: vec!["Grouped Bar Chart".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkType::Rect)
            .with_encoding(Encoding {
                x: Some(Channel::field(&c0.name, FieldType::Nominal)),
                y: Some(Channel::field(&c1.name, FieldType::Nominal)),
                color: Some(
                    Channel::field(&n0.name, FieldType::Quantitative)
                        .with_aggregate(Aggregate::Mean),
                ),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn boxplot(ctx: &RuleContext<'_>) -> Option<Draft> {
    let n0 = ctx.cols.numeric_slot(0)?;
    let cat = ctx.cols.categorical_slot(0);
    let mut columns_used = vec![n0.name.clone()];
    if let Some(c0) = cat {
        columns_used.push(c0.name.clone());
    }
    Some(Draft {
        title: format!("Statistical Distribution of {}", n0.name),
        chart_kind: "Boxplot",
        rationale: format!("Quartiles and median of {}.", n0.name),
        columns_used,
        alternatives: vec!["Violin Plot".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkDef {
                extent: Some("min-max".into()),
                ..MarkDef::new(MarkType::Boxplot)
            })
            .with_encoding(Encoding {
                x: cat.map(|c0| Channel::field(&c0.name, FieldType::Nominal)),
                y: Some(Channel::field(&n0.name, FieldType::Quantitative)),
                color: Some(match cat {
                    Some(c0) => Channel::bare(&c0.name),
                    None => Channel::literal("#10b981"),
                }),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn histogram(ctx: &RuleContext<'_>) -> Option<Draft> {
    // Prefer the second numeric column so the catalog covers more of the
    // dataset; falls back to the first.
    let target = ctx.cols.numeric_slot(1)?;
    Some(Draft {
        title: format!("Frequency of {}", target.name),
        chart_kind: "Histogram",
        rationale: format!("Distribution spread of {}.", target.name),
        columns_used: vec![target.name.clone()],
        alternatives: vec!["Density Plot".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_mark(MarkType::Bar)
            .with_encoding(Encoding {
                x: Some(Channel::bare(&target.name).binned()),
                y: Some(Channel::count()),
                color: Some(Channel::literal("#8b5cf6")),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

pub(crate) fn density_plot(ctx: &RuleContext<'_>) -> Option<Draft> {
    let n0 = ctx.cols.numeric_slot(0)?;
    Some(Draft {
        title: format!("{} Density Curve", n0.name),
        chart_kind: "Density Plot",
        rationale: "Smoothed probability distribution.".into(),
        columns_used: vec![n0.name.clone()],
        alternatives: vec!["Histogram".into()],
        render_spec: VegaLiteSpec::new(ctx.data())
            .with_transform(Transform::Density {
                density: n0.name.clone(),
            })
            .with_mark(MarkType::Area)
            .with_encoding(Encoding {
                // The density transform synthesizes these two fields.
                x: Some(Channel::field("value", FieldType::Quantitative)),
                y: Some(Channel::field("density", FieldType::Quantitative)),
                color: Some(Channel::literal("#ec4899")),
                ..Encoding::default()
            }),
        caveat: None,
    })
}

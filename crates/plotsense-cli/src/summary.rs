//! Human-readable table output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use plotsense_analyze::ChartSuggestion;
use plotsense_model::{ColumnProfile, VisionAnalysis};

pub fn print_detection(analysis: &VisionAnalysis) {
    println!(
        "Detected style: {} (confidence {:.0}%)",
        analysis.detected_label,
        analysis.confidence * 100.0
    );
    println!("{}", analysis.summary);
}

pub fn print_profiles(profiles: &[ColumnProfile]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Distinct"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for profile in profiles {
        table.add_row(vec![
            Cell::new(&profile.name),
            Cell::new(profile.kind),
            Cell::new(profile.distinct_count),
        ]);
    }
    println!("{table}");
}

pub fn print_suggestions(suggestions: &[ChartSuggestion], limit: Option<usize>) {
    let shown = limit.unwrap_or(suggestions.len()).min(suggestions.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Chart"),
        header_cell("Title"),
        header_cell("Columns"),
        header_cell("Why"),
    ]);
    apply_table_style(&mut table);
    for suggestion in &suggestions[..shown] {
        let mut why = suggestion.rationale.clone();
        if let Some(caveat) = &suggestion.caveat {
            why.push_str("\nNote: ");
            why.push_str(caveat);
        }
        table.add_row(vec![
            Cell::new(&suggestion.id),
            Cell::new(&suggestion.chart_kind),
            Cell::new(&suggestion.title),
            Cell::new(suggestion.columns_used.join(", ")),
            Cell::new(why),
        ]);
    }
    println!("{table}");
    if shown < suggestions.len() {
        println!("({} more not shown)", suggestions.len() - shown);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

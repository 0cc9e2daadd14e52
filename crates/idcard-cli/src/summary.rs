use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use idcard_model::{BatchSummary, UNKNOWN};

/// Render the batch result: one table per bucket plus the counts line.
///
/// With `json` set, the summary is emitted as a single JSON document in
/// the same shape the web endpoint returns.
pub fn print_summary(summary: &BatchSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    if !summary.valid_ids.is_empty() {
        println!("Valid:");
        println!("{}", valid_table(summary));
    }
    if !summary.invalid_ids.is_empty() {
        println!("Invalid:");
        println!("{}", invalid_table(summary));
    }
    println!(
        "Total: {}  valid: {}  invalid: {}",
        summary.total, summary.valid_count, summary.invalid_count
    );
    Ok(())
}

fn valid_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID Number"),
        header_cell("Region"),
        header_cell("Birth Date"),
        header_cell("Age"),
        header_cell("Sex"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in &summary.valid_ids {
        table.add_row(vec![
            Cell::new(&entry.processed).fg(Color::Green),
            Cell::new(&entry.area),
            Cell::new(&entry.birth_date),
            Cell::new(
                entry
                    .age
                    .map_or_else(|| UNKNOWN.to_string(), |age| age.to_string()),
            ),
            Cell::new(
                entry
                    .gender
                    .map_or_else(|| UNKNOWN.to_string(), |gender| gender.to_string()),
            ),
        ]);
    }
    table
}

fn invalid_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Processed"),
        header_cell("Errors"),
    ]);
    apply_table_style(&mut table);
    for entry in &summary.invalid_ids {
        let errors: Vec<String> = entry.errors.iter().map(ToString::to_string).collect();
        table.add_row(vec![
            Cell::new(&entry.original),
            Cell::new(&entry.processed),
            Cell::new(errors.join("; ")).fg(Color::Red),
        ]);
    }
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

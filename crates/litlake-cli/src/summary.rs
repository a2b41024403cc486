//! Terminal summary rendering for pipeline runs.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use litlake_cli::types::PipelineResult;
use litlake_model::{DataFormat, DataStore};

pub fn print_summary(result: &PipelineResult) {
    println!("Data root: {}", result.data_root.display());
    let store = DataStore::new(&result.data_root);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Area"),
        header_cell("Dataset"),
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_accepted = 0usize;
    let mut total_rejected = 0usize;
    for report in &result.reports {
        total_accepted += report.accepted;
        total_rejected += report.rejected;
        let output = store.dataset_path(report.dataset.area, report.dataset.kind, DataFormat::Ipc);
        table.add_row(vec![
            area_cell(report.dataset.area.as_str()),
            Cell::new(report.dataset.kind.as_str()),
            Cell::new(report.accepted),
            count_cell(report.rejected, Color::Yellow),
            Cell::new(output.display()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All datasets")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_accepted).add_attribute(Attribute::Bold),
        count_cell(total_rejected, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    if let Some(graph) = &result.graph {
        println!();
        println!("Lineage graph: {} nodes", graph.nodes);
        println!("Flat JSON: {}", graph.flat_json.display());
        println!("DOT: {}", graph.dot.display());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn area_cell(area: &str) -> Cell {
    Cell::new(area)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

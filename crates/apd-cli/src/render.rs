//! Terminal rendering of charts, form fields, and predictions.

use anyhow::{Context, Result};
use apd_charts::Chart;
use apd_common::format_numeric;
use apd_model::{FormControl, FormField, RiskAssessment, Severity};
use apd_predict::ModelBundle;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn print_chart(chart: &Chart) {
    println!("{}", chart.title);
    println!("{}", chart.id.question());
    println!("{}", chart_table(chart));
    if chart.dropped > 0 {
        println!("({} rows outside every bin or group)", chart.dropped);
    }
    println!();
}

/// One row per category, one value column per series.
pub fn chart_table(chart: &Chart) -> Table {
    let mut table = Table::new();
    let first = if chart.x_label.is_empty() {
        "Category"
    } else {
        chart.x_label.as_str()
    };
    let mut header = vec![header_cell(first)];
    header.extend(chart.series.iter().map(|series| header_cell(&series.name)));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=chart.series.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (row, category) in chart.categories.iter().enumerate() {
        let mut cells = vec![Cell::new(category).add_attribute(Attribute::Bold)];
        cells.extend(chart.series.iter().map(|series| {
            match series.values.get(row).copied().flatten() {
                Some(value) => value_cell(value),
                None => dim_cell("-"),
            }
        }));
        table.add_row(cells);
    }
    table
}

/// The chart as CSV: a header row, then one row per category. Empty cells
/// mark categories without data.
pub fn chart_csv(chart: &Chart) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let first = if chart.x_label.is_empty() {
        "category"
    } else {
        chart.x_label.as_str()
    };
    let mut header = vec![first];
    header.extend(chart.series.iter().map(|series| series.name.as_str()));
    writer.write_record(&header).context("write csv header")?;

    for (row, category) in chart.categories.iter().enumerate() {
        let mut fields = vec![category.clone()];
        fields.extend(chart.series.iter().map(|series| {
            series
                .values
                .get(row)
                .copied()
                .flatten()
                .map(format_numeric)
                .unwrap_or_default()
        }));
        writer
            .write_record(&fields)
            .with_context(|| format!("write csv row for {category}"))?;
    }

    let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    let text = String::from_utf8(bytes).context("csv output is not UTF-8")?;
    Ok(text.trim_end_matches('\n').to_string())
}

/// Form fields with their controls and ranges. Choice fields list the
/// vocabulary of the bundle when one is loaded.
pub fn fields_table(bundle: Option<&ModelBundle>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Control"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Default"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 3..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for field in FormField::all() {
        let mut row = vec![
            Cell::new(field.label()).add_attribute(Attribute::Bold),
            Cell::new(field.column()).fg(Color::Blue),
            Cell::new(control_name(field.control())),
        ];
        match field.bounds() {
            Some(bounds) => row.extend([
                Cell::new(format_numeric(bounds.min)),
                Cell::new(format_numeric(bounds.max)),
                Cell::new(format_numeric(bounds.default)),
            ]),
            None => {
                let choices = bundle
                    .map(|bundle| bundle.vocabulary(field.column()).join(" | "))
                    .filter(|joined| !joined.is_empty());
                row.extend([dim_cell("-"), dim_cell("-")]);
                row.push(match choices {
                    Some(joined) => Cell::new(format!("first of: {joined}")),
                    None => dim_cell("first"),
                });
            }
        }
        table.add_row(row);
    }
    table
}

fn control_name(control: FormControl) -> &'static str {
    match control {
        FormControl::Choice => "choice",
        FormControl::Integer => "integer",
        FormControl::Number => "number",
        FormControl::Slider => "slider",
    }
}

pub fn print_assessment(assessment: &RiskAssessment) {
    let color = severity_color(assessment.severity);
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(assessment.headline())
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new(assessment.message()).fg(color)]);
    println!("{table}");
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Success => Color::Green,
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: f64) -> Cell {
    let cell = Cell::new(format_numeric(value));
    if value < 0.0 {
        cell.fg(Color::Magenta)
    } else {
        cell
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

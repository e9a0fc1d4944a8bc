use std::path::Path;

use ags_model::{Issue, RuleId, Severity};
use ags_standards::{Dictionary, DictionaryVersion};
use ags_validate::ValidationReport;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;

/// Issue table: one row per issue, in report order.
pub fn issue_table(report: &ValidationReport, styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Severity"),
        header_cell("Line"),
        header_cell("Group"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    if !styled {
        table.force_no_tty();
    }
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);

    for issue in &report.issues {
        table.add_row(vec![
            Cell::new(issue.rule.as_str()),
            severity_cell(issue.severity),
            optional_cell(issue.line_number),
            optional_cell(issue.group.as_deref()),
            optional_cell(issue.field.as_deref()),
            Cell::new(&issue.message),
        ]);
    }
    table
}

/// `site.ags: 2 error(s), 1 warning(s) (AGS 4.1.1 dictionary)`
pub fn summary_line(path: &Path, report: &ValidationReport) -> String {
    format!(
        "{}: {} error(s), {} warning(s) (AGS {} dictionary)",
        path.display(),
        report.error_count(),
        report.warning_count(),
        report.dictionary.edition()
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a Path,
    dictionary: String,
    errors: usize,
    warnings: usize,
    issues: &'a [Issue],
}

/// Machine-readable report. The parsed document is left out.
pub fn report_json(path: &Path, report: &ValidationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        file: path,
        dictionary: report.dictionary.to_string(),
        errors: report.error_count(),
        warnings: report.warning_count(),
        issues: &report.issues,
    })
}

/// Bundled dictionaries with their sizes; the default is marked.
pub fn dictionary_table(dictionaries: &[&Dictionary], styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Version"),
        header_cell("Edition"),
        header_cell("Groups"),
        header_cell("Headings"),
        header_cell("Default"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !styled {
        table.force_no_tty();
    }
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    for dictionary in dictionaries {
        let version = dictionary.version();
        let default = if version == DictionaryVersion::default() {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(version.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(version.edition()),
            Cell::new(dictionary.group_count()),
            Cell::new(dictionary.heading_count()),
            default,
        ]);
    }
    table
}

/// Every rule the validator knows, in run order within each stage.
pub fn rule_table(styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Stage"),
        header_cell("Description"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !styled {
        table.force_no_tty();
    }
    align_column(&mut table, 0, CellAlignment::Center);

    for rule in RuleId::all() {
        table.add_row(vec![
            Cell::new(rule.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(rule.rule_set().label()),
            Cell::new(rule.description()),
        ]);
    }
    table
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(7)),
        ColumnConstraint::UpperBoundary(Width::Fixed(9)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::UpperBoundary(Width::Fixed(7)),
        ColumnConstraint::UpperBoundary(Width::Fixed(11)),
        ColumnConstraint::UpperBoundary(Width::Percentage(70)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
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

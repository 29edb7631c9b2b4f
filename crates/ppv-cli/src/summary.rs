//! Terminal output: verdict and rule tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ppv_engine::RuleEngine;
use ppv_model::VerdictStatus;

use crate::commands::ValidateResult;

pub fn print_summary(result: &ValidateResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Center);
    }

    for verdict in result.verdicts.values() {
        table.add_row(vec![
            Cell::new(&verdict.rule_id),
            status_cell(verdict.status),
            Cell::new(&verdict.message),
        ]);
    }
    println!("{table}");

    println!(
        "{} checks: {} alerts, {} conditions, {} passed, {} not applicable",
        result.verdicts.len(),
        result.count(VerdictStatus::Alert),
        result.count(VerdictStatus::Condition),
        result.count(VerdictStatus::Pass),
        result.count(VerdictStatus::NotApplicable),
    );
    if let Some(path) = &result.report_path {
        println!("Disclosure report: {}", path.display());
    }
}

pub fn print_rules(engine: &RuleEngine) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Validator"),
        header_cell("Trigger"),
    ]);
    apply_table_style(&mut table);

    for rule in engine.rules() {
        let trigger = match &rule.trigger {
            Some(trigger) => trigger.to_value().to_string(),
            None => "always".to_string(),
        };
        table.add_row(vec![
            Cell::new(&rule.id),
            Cell::new(&rule.validator),
            Cell::new(trigger),
        ]);
    }
    println!("{table}");
    println!("{} rules", engine.len());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn status_cell(status: VerdictStatus) -> Cell {
    let cell = Cell::new(status.as_str());
    match status {
        VerdictStatus::Pass => cell.fg(Color::Green),
        VerdictStatus::Alert => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        VerdictStatus::Condition => cell.fg(Color::Yellow),
        VerdictStatus::NotApplicable => cell.add_attribute(Attribute::Dim),
    }
}

use colored::Colorize;

use crate::model::attributes::Attributes;
use crate::result::{Status, StatusReport};

pub fn print(report: &StatusReport, verbose: bool) {
    if !report.errors.is_empty() {
        println!("\n{}", "── Errors ──".bold());
        for error in &report.errors {
            println!("  {} {}", "FAIL".red().bold(), error);
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "── Warnings ──".bold());
        for warning in &report.warnings {
            println!("  {} {}", "WARN".yellow().bold(), warning);
        }
    }

    if !report.mapped_attributes.is_empty() {
        println!("\n{}", "── Mapped attributes ──".bold());
        print_attributes(&report.mapped_attributes);
    }

    if verbose && !report.available_attributes.is_empty() {
        println!("\n{}", "── Available attributes ──".bold());
        print_attributes(&report.available_attributes);
    }

    println!();
    print_summary(report);
}

fn print_attributes(attributes: &Attributes) {
    // Align values on the longest name
    let width = attributes.keys().map(|k| k.chars().count()).max().unwrap_or(0);

    for (name, values) in attributes.iter() {
        let rendered = if values.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            values.join(", ")
        };
        println!("  {} {:<width$}  {}", "•".dimmed(), name, rendered, width = width);
    }
}

fn print_summary(report: &StatusReport) {
    let line = format!(
        "Status: {} | {} errors | {} warnings | {} attributes",
        report.status,
        report.errors.len(),
        report.warnings.len(),
        report.available_attributes.len(),
    );

    match report.status {
        Status::Error => println!("{}", line.red().bold()),
        Status::Success if !report.warnings.is_empty() => println!("{}", line.yellow().bold()),
        Status::Success => println!("{}", line.green().bold()),
    }
}

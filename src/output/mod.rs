pub mod json;
pub mod terminal;

use crate::result::StatusReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

pub fn print_report(report: &StatusReport, verbose: bool, format: OutputFormat) {
    match format {
        OutputFormat::Json => json::print(report),
        OutputFormat::Terminal => terminal::print(report, verbose),
    }
}

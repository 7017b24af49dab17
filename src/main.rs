mod checks;
mod cli;
mod config;
mod model;
mod output;
mod parsers;
mod rc_config;
mod result;
mod validator;

use std::io::Read;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::control;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use output::OutputFormat;
use rc_config::RcConfig;
use validator::XmlResponseValidator;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let rc = match cli.config.as_deref() {
        Some(path) => match RcConfig::from_file(path) {
            Ok(rc) => rc,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                process::exit(2);
            }
        },
        None => RcConfig::discover(&std::env::current_dir().unwrap_or_default()),
    };

    let settings = match config::resolve(&cli, rc) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    if settings.no_color {
        control::set_override(false);
    }

    let payload = match read_payload(&cli.response) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    };

    info!(source = %cli.response.display(), bytes = payload.len(), "checking SAML response");

    let validator = XmlResponseValidator::new(payload, settings.validator);
    let report = checks::run(&validator, &settings.mapping);

    let format = if settings.json {
        OutputFormat::Json
    } else {
        OutputFormat::Terminal
    };
    output::print_report(&report, settings.verbose, format);

    if !report.is_success() {
        process::exit(1);
    }
}

/// Raw bytes; text decoding is left to the validator.
fn read_payload(source: &Path) -> Result<Vec<u8>> {
    if source == Path::new("-") {
        let mut payload = Vec::new();
        std::io::stdin()
            .read_to_end(&mut payload)
            .context("Failed to read SAML response from stdin")?;
        return Ok(payload);
    }
    std::fs::read(source).with_context(|| format!("Failed to read {}", source.display()))
}

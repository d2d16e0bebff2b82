/**
 * Angular Template Scanner CLI - ng-scan
 *
 * Prints the classification of a cursor position inside a template as JSON.
 */
use std::process;

use angular_template_scanner_cli::cli::{command, ScanArgs};
use angular_template_scanner_cli::scan::perform_scan;
use angular_template_scanner_cli::version::version_string;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = ScanArgs::from_matches(&command().get_matches());

    let default_level = args.log_level();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("{}", version_string());

    let report = match perform_scan(&args) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

#![deny(clippy::all)]

/**
 * Angular Template Scanner CLI
 *
 * Classifies a cursor position inside a template file from the command line.
 */
pub use angular_template_scanner as scanner;

pub mod cli;
pub mod scan;
pub mod version;

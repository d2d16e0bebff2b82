//! Version
//!
//! Version information for the scanner CLI.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_string() -> String {
    format!("Angular Template Scanner v{}", VERSION)
}

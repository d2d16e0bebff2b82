//! Command Line
//!
//! Argument definitions for `ng-scan`.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Arguments of one `ng-scan` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanArgs {
    pub file: PathBuf,
    /// 0-based line
    pub line: usize,
    /// 0-based column, in characters
    pub column: usize,
    pub config: Option<PathBuf>,
    /// Component names added to those from the config file
    pub components: Vec<String>,
    /// `false` when `--no-attributes` was given
    pub include_attributes: bool,
    pub pre_chars: usize,
    pub verbose: bool,
}

pub fn command() -> Command {
    Command::new("ng-scan")
        .version(crate::version::VERSION)
        .about("Classify a cursor position inside an Angular template")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Template file to read"),
        )
        .arg(
            Arg::new("line")
                .short('l')
                .long("line")
                .value_name("N")
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("0-based line of the cursor"),
        )
        .arg(
            Arg::new("column")
                .short('c')
                .long("column")
                .value_name("N")
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("0-based column of the cursor"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Scanner config (JSON)"),
        )
        .arg(
            Arg::new("component")
                .long("component")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Known component or directive name, repeatable"),
        )
        .arg(
            Arg::new("no-attributes")
                .long("no-attributes")
                .action(ArgAction::SetTrue)
                .help("Do not parse the attributes of the enclosing tag"),
        )
        .arg(
            Arg::new("pre-chars")
                .long("pre-chars")
                .value_name("N")
                .default_value("1")
                .value_parser(value_parser!(usize))
                .help("Number of characters before the cursor to report"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log scanner decisions (trace level) to stderr"),
        )
}

impl ScanArgs {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else {
            "warn"
        }
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        ScanArgs {
            file: matches.get_one::<PathBuf>("file").cloned().unwrap_or_default(),
            line: matches.get_one::<usize>("line").copied().unwrap_or(0),
            column: matches.get_one::<usize>("column").copied().unwrap_or(0),
            config: matches.get_one::<PathBuf>("config").cloned(),
            components: matches
                .get_many::<String>("component")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
            include_attributes: !matches.get_flag("no-attributes"),
            pre_chars: matches.get_one::<usize>("pre-chars").copied().unwrap_or(1),
            verbose: matches.get_flag("verbose"),
        }
    }
}

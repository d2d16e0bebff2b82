//! Perform Scan
//!
//! Reads the template and configuration named on the command line and
//! classifies the requested cursor position.

use anyhow::Context;
use serde::Serialize;
use std::fs;
use tracing::debug;

use crate::cli::ScanArgs;
use crate::scanner::{ComponentRegistry, Position, ScannerConfig, SourceDocument, Tag, TagScanner};

/// What `ng-scan` prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub tag: Option<Tag>,
    /// Characters right before the cursor
    pub preceding: String,
}

pub fn perform_scan(args: &ScanArgs) -> anyhow::Result<ScanReport> {
    let config = match &args.config {
        Some(path) => ScannerConfig::load(path)?,
        None => ScannerConfig::default(),
    };
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read template {}", args.file.display()))?;
    let document = SourceDocument::new(content);
    scan_document(&document, &config, args)
}

/// Classify the cursor of `args` inside an already loaded document.
pub fn scan_document(
    document: &SourceDocument,
    config: &ScannerConfig,
    args: &ScanArgs,
) -> anyhow::Result<ScanReport> {
    let line = document
        .line(args.line)
        .with_context(|| format!("cannot place cursor in {}", args.file.display()))?;

    let mut components = config.component_set();
    components.extend(args.components.iter().cloned());
    debug!(
        line = args.line,
        column = args.column,
        components = components.len(),
        "scanning"
    );

    let include_attributes = config.include_attributes && args.include_attributes;
    let position = Position::new(args.line, args.column);
    let scanner = TagScanner::new(document, &components);
    let tag = scanner.scan_line(line, position, include_attributes);
    if let Some(tag) = &tag {
        if components.is_component(&tag.name) {
            debug!(tag = tag.name.as_str(), "cursor is inside a component tag");
        }
    }

    Ok(ScanReport {
        tag,
        preceding: scanner.typing_pre_char(position, args.pre_chars),
    })
}

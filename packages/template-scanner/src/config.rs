//! Scanner Configuration
//!
//! Loaded from a JSON file such as:
//!
//! ```json
//! {
//!   "includeAttributes": true,
//!   "components": ["app-root", "user-card"],
//!   "componentPrefixes": ["nz-", "mat-"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::resources::ComponentSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScannerConfig {
    /// Parse the attribute list of the enclosing tag
    pub include_attributes: bool,
    /// Exact component and directive names
    pub components: Vec<String>,
    /// Names starting with one of these are components too
    pub component_prefixes: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            include_attributes: true,
            components: Vec::new(),
            component_prefixes: Vec::new(),
        }
    }
}

impl ScannerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ScanError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn component_set(&self) -> ComponentSet {
        self.components
            .iter()
            .cloned()
            .collect::<ComponentSet>()
            .with_prefixes(self.component_prefixes.iter().cloned())
    }
}

//! The generated project's package.json
//!
//! The manifest is modeled as a structured record for the fields the patcher
//! touches, with a flattened escape-hatch map carrying every other field
//! through load/patch/save untouched.

pub mod patcher;

pub use patcher::{patch, SIDE_FILE};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Manifest file patched after materialization
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub scripts: Map<String, Value>,

    /// Everything else: dependencies, devDependencies, license, ...
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl PackageManifest {
    pub async fn load(path: &Path) -> Result<PackageManifest> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let mut content =
            serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        content.push('\n');
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

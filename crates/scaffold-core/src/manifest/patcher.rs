//! Post-copy patching of the generated project's manifest

use super::{PackageManifest, MANIFEST_FILE};
use crate::backend::Backend;
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Build-time side-file keyed by backend id, shipped inside a template and
/// consumed here. It never remains in the generated project.
pub const SIDE_FILE: &str = "backends.json";

/// Patch the copied project: apply the backend-specific manifest fields from
/// the side-file (or the built-in scripts table when the template ships
/// none), then set the project name. A template without a manifest is left
/// alone.
pub async fn patch(target_dir: &Path, project_name: &str, backend: Backend) -> Result<()> {
    let manifest_path = target_dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Ok(());
    }

    let mut manifest = PackageManifest::load(&manifest_path).await?;

    let side_path = target_dir.join(SIDE_FILE);
    if side_path.is_file() {
        match load_side_file(&side_path).await {
            Ok(overrides) => {
                if let Some(entry) = overrides.get(backend.id()).and_then(Value::as_object) {
                    apply_overrides(&mut manifest, entry);
                }
            }
            Err(err) => {
                eprintln!(
                    "{} Ignoring malformed {}: {:#}",
                    "Warning:".yellow(),
                    SIDE_FILE,
                    err
                );
            }
        }
        // consumed (or unusable) either way - it must never ship
        fs::remove_file(&side_path)
            .await
            .with_context(|| format!("Failed to remove {}", side_path.display()))?;
    } else {
        manifest.scripts = default_scripts(backend);
    }

    // The CLI argument always wins, whatever the template or side-file said
    manifest.name = Some(project_name.to_string());

    manifest.save(&manifest_path).await
}

async fn load_side_file(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("expected a JSON object keyed by backend id"),
    }
}

/// Shallow per-key merge of a side-file entry into the manifest, with one
/// exception: `scripts` is replaced wholesale. Build script sets are
/// mutually exclusive per backend, and merging two of them key-by-key would
/// leave hybrid entries that run the wrong backend's build.
fn apply_overrides(manifest: &mut PackageManifest, entry: &Map<String, Value>) {
    for (key, value) in entry {
        match key.as_str() {
            "scripts" => {
                if let Some(scripts) = value.as_object() {
                    manifest.scripts = scripts.clone();
                }
            }
            "name" => {
                manifest.name = value.as_str().map(str::to_string);
            }
            _ => {
                manifest.rest.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Built-in build scripts for templates that ship without a side-file
fn default_scripts(backend: Backend) -> Map<String, Value> {
    let entries: &[(&str, &str)] = match backend {
        Backend::R => &[
            (
                "build",
                "esbuild srcts/main.tsx --bundle --minify --outfile=r/www/main.js",
            ),
            (
                "watch",
                "esbuild srcts/main.tsx --bundle --sourcemap --outfile=r/www/main.js --watch",
            ),
            ("clean", "rm -rf r/www"),
        ],
        Backend::Py => &[
            (
                "build",
                "esbuild srcts/main.tsx --bundle --minify --outfile=py/www/main.js",
            ),
            (
                "watch",
                "esbuild srcts/main.tsx --bundle --sourcemap --outfile=py/www/main.js --watch",
            ),
            ("clean", "rm -rf py/www"),
        ],
        Backend::Both => &[
            (
                "build:r",
                "esbuild srcts/main.tsx --bundle --minify --outfile=r/www/main.js",
            ),
            (
                "build:py",
                "esbuild srcts/main.tsx --bundle --minify --outfile=py/www/main.js",
            ),
            ("build", "npm run build:r && npm run build:py"),
            (
                "watch:r",
                "esbuild srcts/main.tsx --bundle --sourcemap --outfile=r/www/main.js --watch",
            ),
            (
                "watch:py",
                "esbuild srcts/main.tsx --bundle --sourcemap --outfile=py/www/main.js --watch",
            ),
            ("clean", "rm -rf r/www py/www"),
        ],
    };

    entries
        .iter()
        .map(|(key, command)| (key.to_string(), Value::String(command.to_string())))
        .collect()
}

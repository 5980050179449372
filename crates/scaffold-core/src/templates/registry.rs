//! Template discovery from the local templates root

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory names never offered as templates, even when present in the root
const RESERVED_NAMES: &[&str] = &["node_modules", "dist", "www", "__pycache__"];

/// One discoverable template directory
#[derive(Debug, Clone)]
pub struct TemplateDescriptor {
    /// Directory name under the templates root
    pub id: String,
    /// Derived human name, see [`display_name_from_id`]
    pub display_name: String,
    pub description: String,
    /// Declared template version, when the metadata provides one
    pub version: Option<String>,
    pub path: PathBuf,
}

/// The slice of a template's package.json the registry reads
#[derive(Debug, Clone, Default, Deserialize)]
struct TemplateMeta {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

impl TemplateMeta {
    /// A missing or corrupt metadata file is treated as empty - broken
    /// metadata must never make a template undiscoverable.
    fn load(path: &Path) -> TemplateMeta {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}

/// Scan the immediate children of `root` for templates.
///
/// Hidden names, reserved names, and non-directories are skipped. The result
/// is sorted lexicographically by id so prompt numbering is stable across
/// runs.
pub fn discover(root: &Path, fallback_description: &str) -> Result<Vec<TemplateDescriptor>> {
    if !root.is_dir() {
        return Err(ScaffoldError::TemplatesRootMissing(root.to_path_buf()).into());
    }

    let entries =
        fs::read_dir(root).with_context(|| format!("Failed to read {}", root.display()))?;

    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue, // a non-UTF-8 name cannot be offered in a prompt
        };
        if name.starts_with('.') || RESERVED_NAMES.contains(&name.as_str()) {
            continue;
        }
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let path = entry.path();
        let meta = TemplateMeta::load(&path.join("package.json"));
        templates.push(TemplateDescriptor {
            display_name: display_name_from_id(&name),
            description: meta
                .description
                .unwrap_or_else(|| fallback_description.to_string()),
            version: meta.version,
            id: name,
            path,
        });
    }

    templates.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(templates)
}

/// Derive a human name from a directory id: drop a leading `N-` ordering
/// prefix, then title-case the remaining hyphen-separated words.
///
/// `1-basic` becomes `Basic`, `2-hello-world` becomes `Hello World`.
pub fn display_name_from_id(id: &str) -> String {
    let rest = match id.split_once('-') {
        Some((prefix, rest))
            if !prefix.is_empty()
                && prefix.bytes().all(|b| b.is_ascii_digit())
                && !rest.is_empty() =>
        {
            rest
        }
        _ => id,
    };

    rest.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

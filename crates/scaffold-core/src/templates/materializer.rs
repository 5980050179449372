//! Template tree copying with artifact and backend filtering

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Names never copied into a generated project: dependency caches, build
/// output (a backend's `www/` is produced by the generated app's own build
/// step), and editor/VCS droppings.
pub const SKIP_ALWAYS: &[&str] = &[
    "node_modules",
    "www",
    "dist",
    "__pycache__",
    ".venv",
    ".git",
    ".DS_Store",
];

/// Counts reported back for the summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: u64,
    pub dirs: u64,
}

/// Mirror `src` into `dest`, leaving out [`SKIP_ALWAYS`] names and
/// `skip_names` (the backend directories the user did not select) at every
/// depth.
///
/// `dest` and any missing parents are created. The source is validated again
/// for every directory reached, so a template that disappears mid-copy is
/// reported instead of silently truncating the output. There is no rollback:
/// a failure partway leaves a partially populated target.
pub async fn copy_tree(src: &Path, dest: &Path, skip_names: &[&str]) -> Result<CopyStats> {
    let mut stats = CopyStats::default();
    let mut pending = vec![(src.to_path_buf(), dest.to_path_buf())];

    while let Some((from, to)) = pending.pop() {
        if !from.is_dir() {
            return Err(ScaffoldError::TemplateSourceMissing(from).into());
        }

        fs::create_dir_all(&to)
            .await
            .with_context(|| format!("Failed to create {}", to.display()))?;
        stats.dirs += 1;

        let mut entries = fs::read_dir(&from)
            .await
            .with_context(|| format!("Failed to read {}", from.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };
            if SKIP_ALWAYS.contains(&name.as_str()) || skip_names.contains(&name.as_str()) {
                continue;
            }

            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                pending.push((entry.path(), to.join(&name)));
            } else if file_type.is_file() {
                fs::copy(entry.path(), to.join(&name))
                    .await
                    .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
                stats.files += 1;
            }
            // symlinks and special files are not part of the template contract
        }
    }

    Ok(stats)
}

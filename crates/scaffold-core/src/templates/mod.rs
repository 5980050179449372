//! Template discovery, materialization, and version checks
//!
//! Templates are plain directory trees under a local templates root. This
//! module locates that root, enumerates its templates, and copies a selected
//! template into the target project directory.

pub mod materializer;
pub mod registry;
pub mod version;

use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub use materializer::{copy_tree, CopyStats};
pub use registry::{discover, TemplateDescriptor};

/// Locate the templates root: an explicit `--template-dir` wins, then the
/// product's environment override, then a `templates/` directory shipped
/// next to the executable, then `templates/` in the working directory.
///
/// Existence is not checked here; [`registry::discover`] reports a missing
/// root as the fatal error it is.
pub fn resolve_templates_root<C: ProductConfig>(
    config: &C,
    override_dir: Option<&Path>,
) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var(config.templates_dir_env()) {
        return PathBuf::from(dir);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let bundled = dir.join("templates");
            if bundled.is_dir() {
                return bundled;
            }
        }
    }
    PathBuf::from("templates")
}

/// Print every discovered template (the `list` subcommand)
pub fn list_templates<C: ProductConfig>(config: &C, template_dir: Option<&Path>) -> Result<()> {
    let root = resolve_templates_root(config, template_dir);
    let templates = registry::discover(&root, config.default_description())?;

    println!(
        "{}",
        format!(
            "{} templates in {}",
            config.display_name(),
            root.display()
        )
        .cyan()
        .bold()
    );
    println!();

    if templates.is_empty() {
        println!("  (none found)");
        return Ok(());
    }

    for template in &templates {
        println!(
            "  {} {} ({}) - {}",
            "->".blue(),
            template.display_name.bold(),
            template.id,
            template.description
        );
    }

    Ok(())
}

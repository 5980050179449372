//! Product configuration trait for CLI binaries
//!
//! A binary built on this library implements this trait to define its
//! identity, where templates come from, and the post-generation
//! instructions it prints.

use crate::backend::{Backend, PackageManager};
use std::path::Path;

/// Configuration implemented by each CLI product built on this library
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (CLI command name)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable that overrides the templates root directory
    fn templates_dir_env(&self) -> &'static str;

    /// Description used for templates whose metadata does not provide one
    fn default_description(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Usage line shown when the project argument is missing
    fn usage(&self) -> String {
        format!("Usage: {} <app-directory>", self.name())
    }

    /// Generate the "next steps" instructions printed after project creation
    fn next_steps(
        &self,
        dir: &Path,
        backend: Backend,
        package_manager: Option<PackageManager>,
    ) -> Vec<String>;
}

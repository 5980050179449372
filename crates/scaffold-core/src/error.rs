//! Typed failures for the scaffolding pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Fatal precondition failures. Each aborts the run before (or during, for
/// `TemplateSourceMissing`) any further writes; everything else in the
/// pipeline propagates as a plain `anyhow::Error`.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The templates root does not exist or is not a directory.
    #[error("templates directory not found: {}", .0.display())]
    TemplatesRootMissing(PathBuf),

    /// The target project directory already exists.
    #[error("target directory already exists: {}", .0.display())]
    TargetExists(PathBuf),

    /// A template directory vanished while it was being copied.
    #[error("template source missing during copy: {}", .0.display())]
    TemplateSourceMissing(PathBuf),
}

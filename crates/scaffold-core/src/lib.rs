//! Scaffold Core - library behind the Shiny-React project generator
//!
//! Generation is a strictly linear pipeline over the local filesystem:
//! discover templates, ask the user what to build, mirror the chosen
//! template into a fresh directory, patch its manifest, optionally inject
//! documentation, and print next steps.
//!
//! # Architecture
//!
//! - **Core operations** - template registry, tree materializer, manifest
//!   patcher, doc injector, advisory runtime probes. No terminal I/O beyond
//!   warnings.
//! - **Workflow configuration** - the [`ProductConfig`] trait lets a binary
//!   define its identity, templates location, and next-steps text.
//! - **CLI/TUI interface** - optional cliclack-based prompt pipeline
//!   (feature-gated).
//!
//! # Feature Flags
//!
//! - `tui` (default): enables the cliclack-based prompts module

pub mod backend;
pub mod docs;
pub mod error;
pub mod manifest;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use backend::{Backend, PackageManager};
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use templates::{copy_tree, discover, CopyStats, TemplateDescriptor};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};

/// CLI version fallback for template compatibility checking.
/// Each binary should pass its own version.
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";

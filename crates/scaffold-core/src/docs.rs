//! Documentation templates copied into generated projects on request
//!
//! Doc templates live in the shared templates root, not inside the
//! per-template directories, so every template gets the same set. Rendering
//! recognizes a fixed token vocabulary; anything else passes through.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tokio::fs;

/// Documentation files looked up in the shared templates root
pub const DOC_TEMPLATES: &[&str] = &["AGENTS.md", "CLAUDE.md"];

/// Tokens recognized by [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ProjectName,
    Backend,
}

impl Placeholder {
    pub const ALL: [Placeholder; 2] = [Placeholder::ProjectName, Placeholder::Backend];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::ProjectName => "{{PROJECT_NAME}}",
            Placeholder::Backend => "{{BACKEND}}",
        }
    }
}

/// Values substituted for the recognized placeholders
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub project_name: String,
    pub backend_label: String,
}

impl RenderContext {
    fn value_of(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::ProjectName => &self.project_name,
            Placeholder::Backend => &self.backend_label,
        }
    }
}

/// Substitute every occurrence of every recognized placeholder token
pub fn render(input: &str, ctx: &RenderContext) -> String {
    let mut out = input.to_string();
    for placeholder in Placeholder::ALL {
        out = out.replace(placeholder.token(), ctx.value_of(placeholder));
    }
    out
}

/// Copy the documentation templates into `target_dir`, rendering
/// placeholders on the way. A missing source is skipped with a warning;
/// the remaining files still land. Returns how many files were written.
pub async fn inject_docs(
    templates_root: &Path,
    target_dir: &Path,
    ctx: &RenderContext,
) -> Result<usize> {
    let mut written = 0;

    for name in DOC_TEMPLATES {
        let source = templates_root.join(name);
        let content = match fs::read_to_string(&source).await {
            Ok(content) => content,
            Err(_) => {
                eprintln!(
                    "{} Documentation template '{}' not found in {}",
                    "Warning:".yellow(),
                    name,
                    templates_root.display()
                );
                continue;
            }
        };

        let dest = target_dir.join(name);
        fs::write(&dest, render(&content, ctx))
            .await
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn ctx() -> RenderContext {
        RenderContext {
            project_name: "demo".to_string(),
            backend_label: "Python".to_string(),
        }
    }

    #[test]
    fn render_substitutes_every_occurrence() {
        let input = "# {{PROJECT_NAME}}\n{{PROJECT_NAME}} runs on {{BACKEND}}.";
        assert_eq!(render(input, &ctx()), "# demo\ndemo runs on Python.");
    }

    #[test]
    fn unrecognized_tokens_pass_through() {
        let input = "{{PROJECT_NAME}} keeps {{SOMETHING_ELSE}} and {single} braces";
        assert_eq!(render(input, &ctx()), "demo keeps {{SOMETHING_ELSE}} and {single} braces");
    }

    #[tokio::test]
    async fn missing_sources_are_skipped_individually() {
        let templates_root = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        // only the first doc template exists
        std_fs::write(
            templates_root.path().join(DOC_TEMPLATES[0]),
            "Project: {{PROJECT_NAME}}",
        )
        .unwrap();

        let written = inject_docs(templates_root.path(), target.path(), &ctx())
            .await
            .unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            std_fs::read_to_string(target.path().join(DOC_TEMPLATES[0])).unwrap(),
            "Project: demo"
        );
        assert!(!target.path().join(DOC_TEMPLATES[1]).exists());
    }
}

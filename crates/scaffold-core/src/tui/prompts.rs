//! Charm-style CLI prompts using cliclack
//!
//! The selector runs in a fixed order: template, backend, package manager
//! (Python backends only), docs inclusion. Every choice can be preempted by
//! a flag; `--yes` substitutes the default for anything still unanswered.
//! Out-of-range input cannot happen - the select/confirm widgets re-prompt
//! by construction.

use crate::backend::{Backend, PackageManager};
use crate::docs::{self, RenderContext};
use crate::error::ScaffoldError;
use crate::manifest;
use crate::product::ProductConfig;
use crate::runtime;
use crate::templates::{self, materializer, registry, version, TemplateDescriptor};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Directory name (or path) for the new project
    pub name: Option<String>,

    /// Local directory to use as the templates root
    pub template_dir: Option<PathBuf>,

    /// Template id to use without prompting
    pub template: Option<String>,

    /// Backend id to use without prompting (r, py, both)
    pub backend: Option<String>,

    /// Package manager id to use without prompting (pip, uv)
    pub package_manager: Option<String>,

    /// Include agent documentation files
    pub docs: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the create flow with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Resolve the target before anything touches the disk
    let (project_name, target_dir) = resolve_target(config, &args)?;

    // Step 2: Locate the templates root and discover templates
    let templates_root = templates::resolve_templates_root(config, args.template_dir.as_deref());
    let available = registry::discover(&templates_root, config.default_description())?;

    // Step 3: Select template
    let template = select_template(&available, &args)?;

    if let Some(template_version) = &template.version {
        if let Some(warning) =
            version::upgrade_warning(cli_version, template_version, config.upgrade_command())
        {
            cliclack::log::warning(warning)?;
        }
    }

    // Step 4: Select backend
    let backend = select_backend(&args)?;

    // Step 5: Select package manager (Python backends only)
    let package_manager = select_package_manager(backend, &args)?;

    // Step 6: Docs inclusion
    let include_docs = select_docs(&args)?;

    // Step 7: Advisory runtime check
    report_runtimes(backend);

    // Step 8: Materialize the template
    let spinner = cliclack::spinner();
    spinner.start("Copying template...");
    let stats = materializer::copy_tree(&template.path, &target_dir, backend.skip_dirs()).await?;
    spinner.stop(format!(
        "Copied {} files into {}",
        stats.files,
        target_dir.display()
    ));

    // Step 9: Patch the manifest
    manifest::patch(&target_dir, &project_name, backend).await?;

    // Step 10: Inject docs
    if include_docs {
        let ctx = RenderContext {
            project_name: project_name.clone(),
            backend_label: backend.display_name().to_string(),
        };
        let written = docs::inject_docs(&templates_root, &target_dir, &ctx).await?;
        cliclack::log::info(format!("Added {} documentation file(s)", written))?;
    }

    cliclack::log::success(format!(
        "Created {} from template '{}'",
        project_name, template.id
    ))?;
    print_next_steps(config, &target_dir, backend, package_manager)?;

    Ok(())
}

/// The target must not pre-exist: bail before any prompt or copy so a failed
/// run never disturbs an existing tree.
fn resolve_target<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<(String, PathBuf)> {
    let Some(name_arg) = &args.name else {
        println!("{}", config.usage());
        anyhow::bail!("missing <app-directory> argument");
    };

    let path = PathBuf::from(name_arg);
    let target_dir = if path.is_absolute() {
        path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&path)
    };

    if target_dir.exists() {
        return Err(ScaffoldError::TargetExists(target_dir).into());
    }

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| name_arg.clone());

    Ok((project_name, target_dir))
}

fn select_template<'a>(
    available: &'a [TemplateDescriptor],
    args: &CreateArgs,
) -> Result<&'a TemplateDescriptor> {
    if available.is_empty() {
        anyhow::bail!("No templates found.");
    }

    if let Some(id) = args.template.as_deref() {
        return available.iter().find(|t| t.id == id).ok_or_else(|| {
            let ids: Vec<&str> = available.iter().map(|t| t.id.as_str()).collect();
            anyhow::anyhow!(
                "Template '{}' not found. Available templates: {}",
                id,
                ids.join(", ")
            )
        });
    }

    // Only one option (or non-interactive): use the first without prompting
    if available.len() == 1 || args.yes {
        let template = &available[0];
        cliclack::log::info(format!(
            "Using template: {} - {}",
            template.display_name, template.description
        ))?;
        return Ok(template);
    }

    let mut select = cliclack::select("Select a template");
    for (idx, template) in available.iter().enumerate() {
        select = select.item(idx, &template.display_name, &template.description);
    }
    let selected: usize = select.interact()?;

    Ok(&available[selected])
}

fn select_backend(args: &CreateArgs) -> Result<Backend> {
    if let Some(flag) = args.backend.as_deref() {
        return Backend::parse(flag).ok_or_else(|| {
            anyhow::anyhow!("Unknown backend '{}'. Expected one of: r, py, both", flag)
        });
    }

    if args.yes {
        let backend = Backend::ALL[0];
        cliclack::log::info(format!("Backend: {}", backend.display_name()))?;
        return Ok(backend);
    }

    let mut select = cliclack::select("Which backend should the app use?");
    for backend in Backend::ALL {
        select = select.item(backend.id(), backend.display_name(), backend.hint());
    }
    let picked: &str = select.interact()?;

    // items were built from Backend::ALL, so this cannot miss
    Ok(Backend::parse(picked).unwrap_or(Backend::ALL[0]))
}

fn select_package_manager(backend: Backend, args: &CreateArgs) -> Result<Option<PackageManager>> {
    if !backend.includes_python() {
        if args.package_manager.is_some() {
            cliclack::log::warning("--package-manager only applies to Python backends; ignoring")?;
        }
        return Ok(None);
    }

    if let Some(flag) = args.package_manager.as_deref() {
        return match PackageManager::parse(flag) {
            Some(pm) => Ok(Some(pm)),
            None => Err(anyhow::anyhow!(
                "Unknown package manager '{}'. Expected one of: pip, uv",
                flag
            )),
        };
    }

    if args.yes {
        return Ok(Some(PackageManager::Pip));
    }

    let mut select = cliclack::select("How should Python dependencies be managed?");
    for pm in PackageManager::ALL {
        select = select.item(pm.id(), pm.display_name(), pm.hint());
    }
    let picked: &str = select.interact()?;

    Ok(PackageManager::parse(picked))
}

fn select_docs(args: &CreateArgs) -> Result<bool> {
    // --docs forces inclusion; --yes keeps the default (off) for the rest
    if args.docs || args.yes {
        return Ok(args.docs);
    }

    let include = cliclack::confirm("Include docs for AI coding agents (AGENTS.md)?")
        .initial_value(false)
        .interact()?;

    Ok(include)
}

fn report_runtimes(backend: Backend) {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let runtimes = runtime::check_runtimes(backend);
    let summary: Vec<String> = runtimes
        .iter()
        .map(|r| {
            if r.available {
                format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", r.name)
            }
        })
        .collect();

    spinner.stop(format!("Detected runtimes: {}", summary.join(", ")));
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    backend: Backend,
    package_manager: Option<PackageManager>,
) -> Result<()> {
    let steps = config.next_steps(project_dir, backend, package_manager);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

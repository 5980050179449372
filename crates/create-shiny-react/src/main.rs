//! create-shiny-react - project scaffolding for Shiny-React apps

use anyhow::Result;
use clap::{Parser, Subcommand};
use scaffold_core::backend::{Backend, PackageManager};
use scaffold_core::tui::CreateArgs;
use scaffold_core::ProductConfig;
use std::path::{Path, PathBuf};

/// CLI version - compared against template metadata
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shiny-React product configuration
#[derive(Clone)]
pub struct ShinyReactConfig;

impl ProductConfig for ShinyReactConfig {
    fn name(&self) -> &'static str {
        "create-shiny-react"
    }

    fn display_name(&self) -> &'static str {
        "Shiny-React"
    }

    fn templates_dir_env(&self) -> &'static str {
        "SHINY_REACT_TEMPLATES_DIR"
    }

    fn default_description(&self) -> &'static str {
        "Shiny-React template"
    }

    fn docs_url(&self) -> &'static str {
        "https://posit-dev.github.io/shiny-react/"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install create-shiny-react --force"
    }

    fn next_steps(
        &self,
        dir: &Path,
        backend: Backend,
        package_manager: Option<PackageManager>,
    ) -> Vec<String> {
        let mut steps = Vec::new();

        if std::env::current_dir().ok().as_deref() != Some(dir) {
            let shown = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.display().to_string());
            steps.push(format!("cd {}", shown));
        }

        steps.push("npm install".to_string());
        steps.push("npm run build".to_string());

        if backend.includes_python() {
            match package_manager.unwrap_or(PackageManager::Pip) {
                PackageManager::Pip => {
                    steps.push("python3 -m venv .venv && . .venv/bin/activate".to_string());
                    steps.push("pip install -r py/requirements.txt".to_string());
                }
                PackageManager::Uv => {
                    steps.push("uv venv && . .venv/bin/activate".to_string());
                    steps.push("uv pip install -r py/requirements.txt".to_string());
                }
            }
            steps.push("shiny run py/app.py".to_string());
        }
        if backend.includes_r() {
            steps.push("R -e 'shiny::runApp(\"r\")'".to_string());
        }
        steps.push(format!("Read the docs: {}", self.docs_url()));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-shiny-react")]
#[command(about = "CLI for scaffolding Shiny-React apps")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub create: CliCreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Shiny-React app
    Create(CliCreateArgs),
    /// List the templates available in the templates directory
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Directory to create the new app in
    pub name: Option<String>,

    /// Local directory to use as the templates root (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Template id to use (skips the template prompt)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Backend to use: r, py, or both (skips the backend prompt)
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Python package manager: pip or uv
    #[arg(long = "package-manager")]
    pub package_manager: Option<String>,

    /// Include docs for AI coding agents
    #[arg(long)]
    pub docs: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            template_dir: args.template_dir,
            template: args.template,
            backend: args.backend,
            package_manager: args.package_manager,
            docs: args.docs,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Local directory to use as the templates root (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ShinyReactConfig;

    match args.command {
        Some(Command::Create(create_args)) => run_create(&config, create_args).await,
        Some(Command::List(list_args)) => {
            scaffold_core::templates::list_templates(&config, list_args.template_dir.as_deref())
        }
        // No subcommand: default to the create flow
        None => run_create(&config, args.create).await,
    }
}

async fn run_create(config: &ShinyReactConfig, args: CliCreateArgs) -> Result<()> {
    let result = scaffold_core::run(config, args.into(), CLI_VERSION).await;

    // Cursor back on every exit path, error included
    let _ = console::Term::stderr().show_cursor();

    result
}

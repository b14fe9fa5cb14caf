//! CLI Adapter.

mod prompts;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, ApplyOutcome, AskOutcome, ListScope, SyncOutcome};
use crate::domain::{AppError, DestinationPreset};

#[derive(Parser)]
#[command(name = "promptsync")]
#[command(version)]
#[command(
    about = "Mirror a shared git prompt repository and sync prompts into projects",
    long_about = None
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the prompt repository and clone it
    #[clap(visible_alias = "i")]
    Init {
        /// Repository URL (prompted when nothing is configured)
        url: Option<String>,
    },
    /// Pull the latest prompts
    #[clap(visible_alias = "p")]
    Pull,
    /// List prompts in a folder
    #[clap(visible_alias = "ls")]
    List {
        /// Folder relative to the prompts root
        path: Option<String>,
        /// List every prompt file recursively
        #[arg(short, long)]
        all: bool,
        /// Emit entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the prompts root as a tree
    #[clap(visible_alias = "t")]
    Tree,
    /// Print a prompt
    #[clap(visible_alias = "s")]
    Show {
        /// Relative path or #reference
        prompt: String,
    },
    /// Copy a prompt to the clipboard
    #[clap(visible_alias = "c")]
    Copy {
        /// Relative path or #reference
        prompt: String,
    },
    /// Copy a prompt file into a project
    #[clap(visible_alias = "sy")]
    Sync {
        /// Relative path or #reference
        prompt: String,
        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Destination: vscode or cursor
        #[arg(short, long)]
        dest: Option<String>,
        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },
    /// Apply a configured template to a project
    #[clap(visible_alias = "a")]
    Apply {
        /// Template name
        template: Option<String>,
        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Destination for templates without a fixed one: vscode or cursor
        #[arg(short, long)]
        dest: Option<String>,
    },
    /// Find the prompt that best answers a query
    #[clap(visible_alias = "q")]
    Ask {
        /// Free text; words starting with # name prompts directly
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Print the prompts root directory
    Path,
    /// List configured templates
    #[clap(visible_alias = "tp")]
    Templates,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { url } => run_init(url),
        Commands::Pull => api::pull().map(|_| println!("✅ Prompts updated.")),
        Commands::List { path, all, json } => run_list(path, all, json),
        Commands::Tree => api::tree().map(|nodes| print!("{}", api::render_tree(&nodes))),
        Commands::Show { prompt } => api::show(&prompt).map(|shown| println!("{}", shown.content)),
        Commands::Copy { prompt } => api::copy(&prompt)
            .map(|entry| println!("✅ Copied {} to the clipboard", entry.relative_path)),
        Commands::Sync { prompt, root, dest, force } => run_sync(prompt, root, dest, force),
        Commands::Apply { template, root, dest } => run_apply(template, root, dest),
        Commands::Ask { query } => {
            api::ask(&query.join(" ")).map(|outcome| print_answer(&outcome))
        }
        Commands::Path => api::prompts_root().map(|root| println!("{}", root.display())),
        Commands::Templates => run_templates(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "promptsync=debug" } else { "promptsync=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run_init(url: Option<String>) -> Result<(), AppError> {
    let url = match url {
        Some(url) => Some(url),
        None if api::load_config()?.is_configured() => None,
        None => match prompts::prompt_repository_url()? {
            Some(url) => Some(url),
            None => return Ok(()),
        },
    };

    let outcome = api::init(url.as_deref())?;
    if let Some(warning) = &outcome.pull_warning {
        println!("⚠️  Initial pull failed: {}", warning);
    }
    println!("✅ Prompt repository is ready.");
    println!("  Prompts: {}", outcome.prompts_root.display());
    Ok(())
}

fn run_list(path: Option<String>, all: bool, json: bool) -> Result<(), AppError> {
    let scope = if all { ListScope::All } else { ListScope::Folder(path.unwrap_or_default()) };
    let entries = api::list(&scope)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No prompts found.");
        return Ok(());
    }
    for entry in &entries {
        match scope {
            ListScope::All => println!("{}", entry.relative_path),
            ListScope::Folder(_) if entry.is_dir() => println!("{}/", entry.name),
            ListScope::Folder(_) => println!("{}", entry.name),
        }
    }
    Ok(())
}

fn parse_destination(value: &str) -> Result<DestinationPreset, AppError> {
    DestinationPreset::from_name(value).ok_or_else(|| {
        AppError::config_error(format!("Unknown destination '{}'. Use vscode or cursor.", value))
    })
}

fn project_root(root: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

fn run_sync(
    prompt: String,
    root: Option<PathBuf>,
    dest: Option<String>,
    force: bool,
) -> Result<(), AppError> {
    let preset = match dest {
        Some(value) => parse_destination(&value)?,
        None => match prompts::prompt_destination()? {
            Some(preset) => preset,
            None => return Ok(()),
        },
    };
    let root = project_root(root)?;

    let outcome = api::sync(&prompt, &root, preset, |display_path| {
        if force { Ok(true) } else { prompts::confirm_overwrite(display_path) }
    })?;

    match outcome {
        SyncOutcome::Written { display_path, .. } => println!("✅ Synced {}", display_path),
        SyncOutcome::Kept { display_path } => println!("Kept existing {}", display_path),
    }
    Ok(())
}

fn run_apply(
    template: Option<String>,
    root: Option<PathBuf>,
    dest: Option<String>,
) -> Result<(), AppError> {
    let template = match template {
        Some(name) => api::template(&name)?,
        None => {
            let config = api::load_config()?;
            if config.templates.is_empty() {
                return Err(AppError::config_error(format!(
                    "No templates configured. Add [[templates]] to {}",
                    api::config_path()?.display()
                )));
            }
            match prompts::prompt_template(&config.templates)? {
                Some(index) => config.templates[index].clone(),
                None => return Ok(()),
            }
        }
    };

    let root = project_root(root)?;
    let preset = dest.as_deref().map(parse_destination).transpose()?;
    let destination = match api::template_destination(&template, &root, preset) {
        Some(destination) => destination,
        None => match prompts::prompt_destination()? {
            Some(preset) => api::template_destination(&template, &root, Some(preset))
                .ok_or_else(|| AppError::config_error("No destination selected"))?,
            None => return Ok(()),
        },
    };

    let mut resolver = prompts::DialoguerConflictResolver;
    match api::apply(&template, &destination, &mut resolver)? {
        ApplyOutcome::Completed(summary) => println!(
            "✅ Template \"{}\" applied: copied {}, skipped {}, failed {}.",
            template.name, summary.copied, summary.skipped, summary.failed
        ),
        ApplyOutcome::Cancelled => {}
    }
    Ok(())
}

fn print_answer(outcome: &AskOutcome) {
    println!("{}", outcome.to_markdown());
}

fn run_templates() -> Result<(), AppError> {
    let config = api::load_config()?;
    if config.templates.is_empty() {
        println!("No templates configured. Add [[templates]] to {}", api::config_path()?.display());
        return Ok(());
    }

    for template in &config.templates {
        match &template.description {
            Some(description) => println!("{} - {}", template.name, description),
            None => println!("{} ({} files)", template.name, template.files.len()),
        }
    }
    Ok(())
}

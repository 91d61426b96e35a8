//! Command line interface
//!
//! Settings are loaded first (`--settings`, default discovery, `IOC__`
//! environment), logging is initialized from them, and object files
//! named on the command line are appended to the configured ones.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use ioc_application::TypeRegistry;
use ioc_infrastructure::logging::init_logging;
use ioc_infrastructure::{ConfigLoader, IocSettings, bootstrap_with_registry};
use tracing::debug;

/// Command line interface for the IoC object builder
#[derive(Parser, Debug)]
#[command(name = "ioc")]
#[command(about = "Configuration-driven object-graph builder")]
#[command(version)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered types
    Types,

    /// Check that every class resolves and every reference exists
    Check {
        /// Object files, loaded after the configured ones
        files: Vec<PathBuf>,
    },

    /// Build one configured object and print it
    Resolve {
        /// Use the shared instance for the object's class
        #[arg(long)]
        singleton: bool,

        /// Configuration identifier
        id: String,

        /// Object files, loaded after the configured ones
        files: Vec<PathBuf>,
    },
}

impl Command {
    fn object_files(&self) -> &[PathBuf] {
        match self {
            Self::Types => &[],
            Self::Check { files } | Self::Resolve { files, .. } => files,
        }
    }
}

/// Load settings, initialize logging and run the command against stdout
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.settings {
        loader = loader.with_config_path(path);
    }
    let mut settings = loader.load().context("Failed to load settings")?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    init_logging(&settings.logging)?;

    let stdout = io::stdout();
    execute(
        &cli.command,
        settings,
        Arc::new(TypeRegistry::new()),
        &mut stdout.lock(),
    )
}

/// Run `command` with `settings` over `registry`, writing results to `out`
pub fn execute<W: Write>(
    command: &Command,
    mut settings: IocSettings,
    registry: Arc<TypeRegistry>,
    out: &mut W,
) -> anyhow::Result<()> {
    if let Command::Types = command {
        for (name, description) in registry.list() {
            writeln!(out, "{name:<24} {description}")?;
        }
        return Ok(());
    }

    settings
        .object_files
        .extend(command.object_files().iter().cloned());
    debug!(files = settings.object_files.len(), "Bootstrapping container");
    let container = bootstrap_with_registry(settings, registry)?;

    match command {
        Command::Types => Ok(()),
        Command::Check { .. } => {
            let issues = container.check();
            if issues.is_empty() {
                writeln!(out, "ok: {} object(s) checked", container.store().len())?;
                return Ok(());
            }
            for issue in &issues {
                writeln!(out, "{issue}")?;
            }
            bail!("{} issue(s) found", issues.len())
        }
        Command::Resolve { singleton, id, .. } => {
            let resolver = container.resolver();
            let instance = if *singleton {
                resolver.get_single_object_by_id(id)
            } else {
                resolver.get_object_by_id(id)
            }
            .with_context(|| format!("Failed to resolve '{id}'"))?;
            writeln!(out, "{instance:#?}")?;
            Ok(())
        }
    }
}

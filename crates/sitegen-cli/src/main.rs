mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use sitegen_core::Domain;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{all, check, completions, contact, generate, Context};
use crate::error::{report_error, EXIT_FAILURE};
use sitegen_config as config;

#[derive(Debug, Parser)]
#[command(
    name = "sitegen",
    version,
    about = "Generate the iGEM-cga site pages from plain-text data files"
)]
struct Cli {
    /// Site directory holding the data directories and generated pages
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate alumni-stories.html
    Alumni,
    /// Generate the-association.html
    Association,
    /// Generate our-sponsors.html
    Sponsors,
    /// Generate our-previous-teams.html
    Teams,
    /// Regenerate contact-us.html and patch page footers
    Contact,
    /// Run every generator, then the contact update
    All,
    /// Parse and validate all data files without writing anything
    Check,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        root,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let site_config =
        config::load(&root, config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(&root, config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
        debug!(path = %site_config.output_root().display(), "output root resolved");
    }

    let ctx = Context {
        config: &site_config,
        json,
    };

    match command {
        Command::Alumni => generate::generate(&ctx, Domain::Alumni),
        Command::Association => generate::generate(&ctx, Domain::Board),
        Command::Sponsors => generate::generate(&ctx, Domain::Sponsors),
        Command::Teams => generate::generate(&ctx, Domain::Teams),
        Command::Contact => contact::update_contact(&ctx),
        Command::All => all::run_all(&ctx),
        Command::Check => check::check(&ctx),
        Command::Completions(_) => {
            unreachable!("completions command handled before config load")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

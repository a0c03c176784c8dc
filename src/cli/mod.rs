//! Command-line interface for shortname
//!
//! Provides `shorten`, `config` and `completions` subcommands.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod show_config;
mod shorten;
mod utils;

/// Print paths relative to the working directory when they live below it
#[derive(Parser)]
#[command(name = "shortname")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten paths against the working directory
    Shorten(shorten::ShortenArgs),

    /// Print the effective configuration as TOML
    Config(show_config::ConfigArgs),

    /// Generate a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Args)]
struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum, value_name = "SHELL")]
    shell: Shell,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Shorten(args) => shorten::run(args),
        Commands::Config(args) => show_config::run(args),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "shortname", &mut std::io::stdout());
            Ok(())
        }
    }
}

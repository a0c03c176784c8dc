//! Config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::resolve_config;
use crate::config::CliOverrides;

#[derive(Args)]
pub struct ConfigArgs {
    /// Directory to look for a config file in (defaults to the working directory)
    #[arg(short = 'b', long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Config file to load instead of discovering one
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let overrides = CliOverrides { base_dir: args.base, ..CliOverrides::default() };
    let config = resolve_config(args.config.as_deref(), overrides)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{rendered}");
    Ok(())
}

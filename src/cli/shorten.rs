//! Shorten command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use super::utils::{read_paths, resolve_config};
use crate::config::CliOverrides;
use crate::render::render;
use crate::shorten::PathShortener;

#[derive(Args)]
pub struct ShortenArgs {
    /// Paths to shorten
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Also read paths from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Directory to relativize against (defaults to the working directory)
    #[arg(short = 'b', long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Output format: text|jsonl
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Replace this leading directory in paths that stay absolute
    #[arg(long, value_name = "DIR")]
    pub mask_root: Option<PathBuf>,

    /// Replacement used with --mask-root (default: ${SOURCE_DIR})
    #[arg(long, value_name = "TOKEN")]
    pub mask_token: Option<String>,

    /// Config file (default: shortname.toml / shortname.yaml in the base directory)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ShortenArgs) -> Result<()> {
    if args.paths.is_empty() && !args.stdin {
        anyhow::bail!("No paths given. Pass one or more PATH arguments or --stdin");
    }

    let overrides = CliOverrides {
        base_dir: args.base,
        format: args.format,
        mask_root: args.mask_root,
        mask_token: args.mask_token,
    };
    let config = resolve_config(args.config.as_deref(), overrides)?;

    let shortener = match &config.base_dir {
        Some(dir) => PathShortener::new(dir),
        None => PathShortener::from_current_dir()?,
    };

    let mut inputs = args.paths;
    if args.stdin {
        inputs.extend(read_paths(io::stdin().lock())?);
    }

    debug!(
        count = inputs.len(),
        base = %shortener.base_dir().display(),
        format = %config.format,
        "shortening paths"
    );

    let mut records = shortener.shorten_all(&inputs);
    if let Some(root) = &config.mask_root {
        records = records.into_iter().map(|r| r.masked(root, &config.mask_token)).collect();
    }

    let rendered = render(&records, config.format);
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes()).context("Failed writing to stdout")?;
    stdout.flush()?;

    Ok(())
}

//! Merge CLI overrides on top of file configuration

use crate::domain::{Config, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

/// Values given on the command line. `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_dir: Option<PathBuf>,
    pub format: Option<String>,
    pub mask_root: Option<PathBuf>,
    pub mask_token: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Result<Config> {
    if let Some(base_dir) = cli.base_dir {
        config.base_dir = Some(base_dir);
    }
    if let Some(format) = cli.format.as_deref() {
        config.format = parse_output_format(format)?;
    }
    if let Some(mask_root) = cli.mask_root {
        config.mask_root = Some(mask_root);
    }
    if let Some(mask_token) = cli.mask_token {
        config.mask_token = mask_token;
    }
    Ok(config)
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.trim().to_ascii_lowercase().as_str() {
        "text" | "txt" => Ok(OutputFormat::Text),
        "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
        invalid => anyhow::bail!("Invalid output format '{invalid}'. Use: text|jsonl"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_file_values() {
        let file = Config {
            base_dir: Some(PathBuf::from("/from/file")),
            mask_token: "<file>".to_string(),
            ..Config::default()
        };
        let cli = CliOverrides {
            base_dir: Some(PathBuf::from("/from/cli")),
            format: Some("JSONL".to_string()),
            ..CliOverrides::default()
        };

        let merged = merge_cli_with_config(file, cli).expect("merge");
        assert_eq!(merged.base_dir, Some(PathBuf::from("/from/cli")));
        assert_eq!(merged.format, OutputFormat::Jsonl);
        assert_eq!(merged.mask_token, "<file>");
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let merged = merge_cli_with_config(Config::default(), CliOverrides::default()).expect("merge");
        assert_eq!(merged, Config::default());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let err = parse_output_format("xml").expect_err("xml is not a format");
        assert!(err.to_string().contains("Invalid output format"));
    }
}

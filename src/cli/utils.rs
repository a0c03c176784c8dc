//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;

/// Load the config file (explicit, or discovered in the base directory) and
/// apply CLI overrides on top.
pub fn resolve_config(config_path: Option<&Path>, overrides: CliOverrides) -> Result<Config> {
    let search_dir = match &overrides.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };
    let file_config = load_config(&search_dir, config_path)?;
    merge_cli_with_config(file_config, overrides)
}

/// Read one path per line, dropping line terminators and blank lines.
pub fn read_paths<R: BufRead>(reader: R) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed reading paths from stdin")?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        paths.push(PathBuf::from(line));
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_paths_skips_blank_lines() {
        let input = Cursor::new("src/a.rs\n\n   \r\n/etc/hosts\r\n");
        let paths = read_paths(input).expect("read");
        assert_eq!(paths, vec![PathBuf::from("src/a.rs"), PathBuf::from("/etc/hosts")]);
    }

    #[test]
    fn test_read_paths_keeps_inner_spaces() {
        let paths = read_paths(Cursor::new("my dir/file name.txt\n")).expect("read");
        assert_eq!(paths, vec![PathBuf::from("my dir/file name.txt")]);
    }

    #[test]
    fn test_resolve_config_searches_base_dir() {
        let tmp = tempfile::TempDir::new().expect("tmp");
        std::fs::write(tmp.path().join("shortname.toml"), "mask_token = '<repo>'\n")
            .expect("write");

        let overrides =
            CliOverrides { base_dir: Some(tmp.path().to_path_buf()), ..CliOverrides::default() };
        let cfg = resolve_config(None, overrides).expect("config");
        assert_eq!(cfg.mask_token, "<repo>");
        assert_eq!(cfg.base_dir.as_deref(), Some(tmp.path()));
    }
}

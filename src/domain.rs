//! Core data types

use crate::utils::{mask_root, to_posix};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Token substituted for the source directory when masking paths.
pub const DEFAULT_MASK_TOKEN: &str = "${SOURCE_DIR}";

/// How shortened paths are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective configuration after merging file and CLI values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory paths are made relative to. Defaults to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    pub format: OutputFormat,
    /// Source directory to mask in paths that stay absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_root: Option<PathBuf>,
    pub mask_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: None,
            format: OutputFormat::default(),
            mask_root: None,
            mask_token: DEFAULT_MASK_TOKEN.to_string(),
        }
    }
}

/// Outcome of shortening a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedPath {
    /// POSIX form of the raw input.
    pub input: String,
    /// Shortened form, suitable for an artifact URI.
    pub uri: String,
    /// Whether `uri` was made relative to the base directory.
    pub relative: bool,
}

impl ShortenedPath {
    pub fn unchanged(input: &Path) -> Self {
        let rendered = to_posix(input);
        Self { input: rendered.clone(), uri: rendered, relative: false }
    }

    pub fn relativized(input: &Path, relative: &Path) -> Self {
        Self { input: to_posix(input), uri: to_posix(relative), relative: true }
    }

    /// Mask `root` in the uri of a path that was not relativized.
    pub fn masked(mut self, root: &Path, token: &str) -> Self {
        if !self.relative {
            self.uri = mask_root(Path::new(&self.uri), root, token);
        }
        self
    }
}

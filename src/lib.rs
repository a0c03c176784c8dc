//! shortname: render filesystem paths in their shortest POSIX form
//!
//! Paths below the working directory (or an injected base directory) are
//! reported relative to it; everything else is reported unchanged with `/`
//! separators.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod shorten;
pub mod utils;

pub use domain::{Config, OutputFormat, ShortenedPath};
pub use error::{ShortenError, ShortenResult};
pub use shorten::{get_shortest_name, PathShortener};

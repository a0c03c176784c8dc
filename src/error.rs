//! Errors raised while shortening a path

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("current directory unavailable: {0}")]
    CurrentDir(#[source] io::Error),
    #[error("cannot make {path} absolute: {source}")]
    Absolute {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot probe {path}: {source}")]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ShortenResult<T> = Result<T, ShortenError>;

//! Relativize paths against a base directory

use crate::domain::ShortenedPath;
use crate::error::{ShortenError, ShortenResult};
use crate::utils::to_posix;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Shortens paths against a fixed base directory.
///
/// The base is injected rather than read from the process on every call, so a
/// shortener can be shared across threads and tested without changing the
/// working directory.
#[derive(Debug, Clone)]
pub struct PathShortener {
    base_dir: PathBuf,
}

impl PathShortener {
    /// Create a shortener relative to `base_dir`.
    ///
    /// A relative `base_dir` is resolved against the working directory at the
    /// time of each call.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Create a shortener relative to the current working directory.
    pub fn from_current_dir() -> ShortenResult<Self> {
        let cwd = std::env::current_dir().map_err(ShortenError::CurrentDir)?;
        Ok(Self::new(cwd))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Shortest POSIX form of `input`. Never fails; on any error the POSIX form
    /// of `input` itself is returned.
    pub fn shorten<P: AsRef<Path>>(&self, input: P) -> String {
        self.record(input).uri
    }

    /// Like [`shorten`](Self::shorten) but keeps the input and whether the
    /// result was relativized.
    pub fn record<P: AsRef<Path>>(&self, input: P) -> ShortenedPath {
        let input = input.as_ref();
        match self.try_shorten(input) {
            Ok(shortened) => shortened,
            Err(err) => {
                debug!(input = %input.display(), error = %err, "keeping unshortened path");
                ShortenedPath::unchanged(input)
            }
        }
    }

    /// Shorten every input, in order.
    pub fn shorten_all<I, P>(&self, inputs: I) -> Vec<ShortenedPath>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        inputs.into_iter().map(|input| self.record(input)).collect()
    }

    /// Shorten `input`, surfacing failures instead of falling back.
    ///
    /// - `"."` is returned as-is.
    /// - Paths that do not exist are returned unchanged.
    /// - Existing paths strictly below the base directory become relative.
    /// - Everything else, including the base directory itself, is unchanged.
    pub fn try_shorten<P: AsRef<Path>>(&self, input: P) -> ShortenResult<ShortenedPath> {
        let input = input.as_ref();
        if input.as_os_str() == "." {
            return Ok(ShortenedPath::unchanged(input));
        }

        let base = self.absolute_base()?;
        let absolute = if input.is_absolute() { input.to_path_buf() } else { base.join(input) };

        let exists = absolute
            .try_exists()
            .map_err(|source| ShortenError::Probe { path: absolute.clone(), source })?;
        if !exists {
            debug!(input = %input.display(), "path does not exist; not relativizing");
            return Ok(ShortenedPath::unchanged(input));
        }

        // Component-wise containment: `/home/foobar` is not below `/home/foo`.
        match absolute.strip_prefix(&base) {
            Ok(relative) if !relative.as_os_str().is_empty() => {
                debug!(
                    input = %input.display(),
                    relative = %to_posix(relative),
                    "relativized against base directory"
                );
                Ok(ShortenedPath::relativized(input, relative))
            }
            _ => Ok(ShortenedPath::unchanged(input)),
        }
    }

    fn absolute_base(&self) -> ShortenResult<PathBuf> {
        std::path::absolute(&self.base_dir)
            .map_err(|source| ShortenError::Absolute { path: self.base_dir.clone(), source })
    }
}

/// Shortest POSIX form of `input` relative to the current working directory.
///
/// Never fails: if the working directory cannot be read, the POSIX form of
/// `input` is returned.
pub fn get_shortest_name<P: AsRef<Path>>(input: P) -> String {
    let input = input.as_ref();
    match PathShortener::from_current_dir() {
        Ok(shortener) => shortener.shorten(input),
        Err(err) => {
            debug!(input = %input.display(), error = %err, "keeping unshortened path");
            to_posix(input)
        }
    }
}

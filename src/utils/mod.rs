//! Shared helpers

pub mod paths;

pub use paths::{mask_root, normalize_path, to_posix};

//! Path shortening
//!
//! Renders paths in the shortest POSIX form relative to a base directory, the
//! way scanners report artifact locations.

pub mod shortener;

pub use shortener::{get_shortest_name, PathShortener};

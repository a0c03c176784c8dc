//! Path normalization

use std::path::Path;

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Render a path in POSIX form.
///
/// Separators become `/` regardless of host, repeated separators collapse,
/// `.` segments and trailing separators are dropped, `..` is kept as-is.
/// A path with no remaining segments renders as `.` (or `/` when rooted).
pub fn to_posix(path: &Path) -> String {
    let raw = normalize_path(&path.to_string_lossy());
    let rooted = raw.starts_with('/');
    let segments: Vec<&str> =
        raw.split('/').filter(|segment| !segment.is_empty() && *segment != ".").collect();

    match (rooted, segments.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", segments.join("/")),
        (false, true) => ".".to_string(),
        (false, false) => segments.join("/"),
    }
}

/// Replace a leading `root` in `path` with `token` for display.
///
/// The match is textual on the POSIX forms of both paths, so a sibling such as
/// `/src-old/a` is masked by a root of `/src` as well.
pub fn mask_root(path: &Path, root: &Path, token: &str) -> String {
    let rendered = to_posix(path);
    let prefix = to_posix(root);
    match rendered.strip_prefix(prefix.as_str()) {
        Some(rest) => format!("{token}{rest}"),
        None => rendered,
    }
}

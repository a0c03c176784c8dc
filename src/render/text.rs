//! Plain text rendering, one shortened path per line

use crate::domain::ShortenedPath;

pub fn render_text(records: &[ShortenedPath]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.uri);
        out.push('\n');
    }
    out
}

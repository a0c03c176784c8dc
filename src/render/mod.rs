//! Output rendering (plain text, JSONL)

pub mod jsonl;
pub mod text;

pub use jsonl::render_jsonl;
pub use text::render_text;

use crate::domain::{OutputFormat, ShortenedPath};

pub fn render(records: &[ShortenedPath], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(records),
        OutputFormat::Jsonl => render_jsonl(records),
    }
}

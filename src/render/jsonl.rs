//! JSONL rendering of shortened paths

use crate::domain::ShortenedPath;
use serde_json::Value;
use std::collections::BTreeMap;

pub fn render_jsonl(records: &[ShortenedPath]) -> String {
    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        // BTreeMap keeps keys in alphabetical order
        let mut entry: BTreeMap<&str, Value> = BTreeMap::new();
        entry.insert("input", Value::String(record.input.clone()));
        entry.insert("relative", Value::Bool(record.relative));
        entry.insert("uri", Value::String(record.uri.clone()));

        if let Ok(line) = serde_json::to_string(&entry) {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

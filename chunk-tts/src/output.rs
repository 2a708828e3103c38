//! JSON rendering of chunk sequences.
//!
//! The output is a JSON array of `{ "chunk", "rule", "length" }` objects,
//! 2-space indented, with non-ASCII text written as-is.

use crate::text::Chunk;
use std::io::Write;

/// Render chunks as a pretty-printed JSON array.
pub fn render_json(chunks: &[Chunk]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(chunks)
}

/// Render chunks and write them in one go, so nothing is written on failure.
pub fn write_json<W: Write>(mut writer: W, chunks: &[Chunk]) -> std::io::Result<()> {
    let json = render_json(chunks)?;
    writer.write_all(json.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::RuleTag;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_two_space_indent() {
        let chunks = vec![Chunk::new("Hi.", RuleTag::SENTENCE).unwrap()];
        let json = render_json(&chunks).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"chunk\": \"Hi.\",\n    \"rule\": \"sentence\",\n    \"length\": 3\n  }\n]"
        );
    }

    #[test]
    fn test_render_keeps_non_ascii() {
        let chunks = vec![Chunk::new("Café über alles.", RuleTag::SENTENCE).unwrap()];
        let json = render_json(&chunks).unwrap();
        assert!(json.contains("Café über alles."));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_json() {
        let chunks = vec![Chunk::new("One, two", RuleTag::COMMA_FIRST).unwrap()];
        let mut buf = Vec::new();
        write_json(&mut buf, &chunks).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["chunk"], "One, two");
        assert_eq!(value[0]["rule"], "comma_first");
        assert_eq!(value[0]["length"], 8);
    }
}

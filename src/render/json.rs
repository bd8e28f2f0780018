//! JSON output: document tree dumps and the fixture manifest.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fixture::{ContentType, FixtureJob, FixturePlan};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document tree to JSON.
///
/// The dump deserializes back into an equal [`Document`], so a `.json`
/// fixture can be diffed against the tree that produced its siblings.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Describe the content types and a batch plan as JSON.
pub fn manifest_json(plan: &FixturePlan, format: JsonFormat) -> Result<String> {
    serialize(&Manifest::new(plan), format)
}

#[derive(Serialize)]
struct Manifest<'a> {
    generator: &'static str,
    version: &'static str,
    content_types: Vec<ContentTypeEntry>,
    file_count: usize,
    jobs: &'a [FixtureJob],
}

#[derive(Serialize)]
struct ContentTypeEntry {
    tag: &'static str,
    title: String,
    description: &'static str,
}

impl<'a> Manifest<'a> {
    fn new(plan: &'a FixturePlan) -> Self {
        Self {
            generator: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            content_types: ContentType::ALL
                .iter()
                .map(|ct| ContentTypeEntry {
                    tag: ct.as_str(),
                    title: ct.title(),
                    description: ct.description(),
                })
                .collect(),
            file_count: plan.len(),
            jobs: plan.jobs(),
        }
    }
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureSource;
    use crate::model::{Block, Paragraph};

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::titled("Test");
        doc.add_paragraph(Paragraph::with_text("Hello"));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"type\": \"paragraph\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let mut doc = Document::new();
        doc.add_block(Block::HorizontalRule);

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_round_trip() {
        let mut doc = Document::titled("Round");
        doc.add_block(Block::heading("Heading", 2));
        doc.add_spacer(14.4);

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_standard_manifest() {
        let json = manifest_json(&FixturePlan::standard(), JsonFormat::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generator"], "fixturegen");
        assert_eq!(value["file_count"], 22);
        assert_eq!(value["jobs"].as_array().unwrap().len(), 22);

        let types = value["content_types"].as_array().unwrap();
        assert_eq!(types.len(), ContentType::ALL.len());
        assert_eq!(types[0]["tag"], "text");
        assert_eq!(types[0]["title"], ContentType::Text.title());
    }

    #[test]
    fn test_manifest_lists_custom_plan() {
        let plan = FixturePlan::new()
            .job("notes.md", FixtureSource::simple("Notes"))
            .job("ocr.txt", FixtureSource::content(ContentType::Ocr, 2));

        let json = manifest_json(&plan, JsonFormat::Pretty).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["file_count"], 2);
        assert_eq!(value["jobs"][0]["file_name"], "notes.md");
        assert_eq!(value["jobs"][1]["source"]["content_type"], "ocr");
        assert_eq!(value["jobs"][1]["source"]["pages"], 2);
    }
}

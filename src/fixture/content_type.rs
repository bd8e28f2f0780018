//! Content type tags for generated fixtures.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of content a fixture document carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Justified body text, one paragraph per page
    Text,
    /// Vector drawing standing in for an embedded image
    Image,
    /// A styled data table
    Table,
    /// Custom document information fields
    Metadata,
    /// Plain content meant to be encrypted by the system under test
    Encrypted,
    /// Plain content meant to be watermarked by the system under test
    Watermark,
    /// Content meant to be diffed against a sibling fixture
    Comparison,
    /// Text meant for OCR checks
    Ocr,
    /// Many lines per page for performance runs
    Large,
}

impl ContentType {
    /// Every content type, in tag order.
    pub const ALL: [ContentType; 9] = [
        ContentType::Text,
        ContentType::Image,
        ContentType::Table,
        ContentType::Metadata,
        ContentType::Encrypted,
        ContentType::Watermark,
        ContentType::Comparison,
        ContentType::Ocr,
        ContentType::Large,
    ];

    /// The lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Table => "table",
            ContentType::Metadata => "metadata",
            ContentType::Encrypted => "encrypted",
            ContentType::Watermark => "watermark",
            ContentType::Comparison => "comparison",
            ContentType::Ocr => "ocr",
            ContentType::Large => "large",
        }
    }

    /// Title-cased tag used in the fixture heading (e.g., `Ocr`).
    pub fn title(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            ContentType::Text => "justified sample text, one paragraph per page",
            ContentType::Image => "red and blue rectangles drawn as vector graphics",
            ContentType::Table => "4-column table with green header and grid",
            ContentType::Metadata => "custom title, author and subject fields",
            ContentType::Encrypted => "content for encryption and decryption tools",
            ContentType::Watermark => "content for watermarking tools",
            ContentType::Comparison => "content for document comparison",
            ContentType::Ocr => "pangram, digits and alphabets for OCR",
            ContentType::Large => "20 long lines per page for performance runs",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| Error::UnsupportedContentType(s.to_string()))
    }
}

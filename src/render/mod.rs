//! Rendering module for converting document trees to output formats.

mod html;
mod json;
mod markdown;
mod options;
#[cfg(feature = "pdf")]
pub mod pdf;
mod text;

pub use html::{escape_html, to_html};
pub use json::{manifest_json, to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{PageSize, RenderOptions};
#[cfg(feature = "pdf")]
pub use pdf::to_pdf;
pub use text::to_text;

use crate::error::{Error, Result};
use crate::model::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Output formats a document tree can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Portable Document Format
    Pdf,
    /// Plain text
    Text,
    /// Standalone HTML page
    Html,
    /// Markdown
    Markdown,
    /// JSON dump of the tree
    Json,
}

impl OutputFormat {
    /// All formats in a stable order.
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Pdf,
        OutputFormat::Text,
        OutputFormat::Html,
        OutputFormat::Markdown,
        OutputFormat::Json,
    ];

    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(OutputFormat::Pdf),
            "txt" | "text" => Some(OutputFormat::Text),
            "html" | "htm" => Some(OutputFormat::Html),
            "md" | "markdown" => Some(OutputFormat::Markdown),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
    }

    /// Canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }

    /// MIME type of the rendered bytes.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Text => "text/plain",
            OutputFormat::Html => "text/html",
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Json => "application/json",
        }
    }

    /// Cargo feature that compiles in the backend, if the format has one.
    pub fn required_feature(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Pdf => Some("pdf"),
            _ => None,
        }
    }

    /// Whether this build can render the format.
    pub fn is_available(&self) -> bool {
        match self {
            OutputFormat::Pdf => cfg!(feature = "pdf"),
            _ => true,
        }
    }

    /// `MissingDependency` when the backend was compiled out.
    pub fn ensure_available(&self) -> Result<()> {
        match self.required_feature() {
            Some(feature) if !self.is_available() => {
                Err(Error::MissingDependency(missing_feature_message(*self, feature)))
            }
            _ => Ok(()),
        }
    }
}

fn missing_feature_message(format: OutputFormat, feature: &str) -> String {
    format!("{} output requires the `{}` feature", format, feature)
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Pdf => "PDF",
            OutputFormat::Text => "text",
            OutputFormat::Html => "HTML",
            OutputFormat::Markdown => "Markdown",
            OutputFormat::Json => "JSON",
        };
        f.write_str(name)
    }
}

/// Render a document tree to bytes in the given format.
pub fn render(doc: &Document, format: OutputFormat, options: &RenderOptions) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Pdf => render_pdf(doc, options)?,
        OutputFormat::Text => to_text(doc, options)?.into_bytes(),
        OutputFormat::Html => to_html(doc, options)?.into_bytes(),
        OutputFormat::Markdown => to_markdown(doc, options)?.into_bytes(),
        OutputFormat::Json => to_json(doc, JsonFormat::Pretty)?.into_bytes(),
    };
    log::debug!("Rendered {} blocks as {} ({} bytes)", doc.block_count(), format, bytes.len());
    Ok(bytes)
}

#[cfg(feature = "pdf")]
fn render_pdf(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    to_pdf(doc, options)
}

#[cfg(not(feature = "pdf"))]
fn render_pdf(_doc: &Document, _options: &RenderOptions) -> Result<Vec<u8>> {
    Err(Error::MissingDependency(missing_feature_message(
        OutputFormat::Pdf,
        "pdf",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_extension("PDF"), Some(OutputFormat::Pdf));
        assert_eq!(OutputFormat::from_extension("txt"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_extension("htm"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::from_extension("markdown"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_extension("docx"), None);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("out/test_text.txt").unwrap(),
            OutputFormat::Text
        );
        let err = OutputFormat::from_path("noext").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extension_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_extension(format.extension()), Some(format));
        }
    }

    #[test]
    fn test_render_text_bytes() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("bytes"));

        let bytes = render(&doc, OutputFormat::Text, &RenderOptions::default()).unwrap();
        assert_eq!(bytes, b"bytes\n");
    }

    #[test]
    fn test_required_feature() {
        assert_eq!(OutputFormat::Pdf.required_feature(), Some("pdf"));
        for format in [
            OutputFormat::Text,
            OutputFormat::Html,
            OutputFormat::Markdown,
            OutputFormat::Json,
        ] {
            assert_eq!(format.required_feature(), None);
            assert!(format.ensure_available().is_ok());
        }
        assert_eq!(
            missing_feature_message(OutputFormat::Pdf, "pdf"),
            "PDF output requires the `pdf` feature"
        );
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_pdf_available() {
        assert!(OutputFormat::Pdf.ensure_available().is_ok());
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn test_pdf_requires_feature() {
        let err = render(&Document::new(), OutputFormat::Pdf, &RenderOptions::default())
            .unwrap_err();
        assert!(err.is_missing_dependency());

        let upfront = OutputFormat::Pdf.ensure_available().unwrap_err();
        assert_eq!(upfront.to_string(), err.to_string());
        assert!(err.to_string().contains("`pdf` feature"));
    }
}

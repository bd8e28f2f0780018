//! # fixturegen
//!
//! Deterministic test fixture generation for document processing pipelines.
//!
//! A content-type tag and a page count become a document tree, which is
//! rendered to PDF, plain text, HTML, Markdown or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fixturegen::{ContentType, FixtureBuilder, RenderOptions, PageSize};
//!
//! fn main() -> fixturegen::Result<()> {
//!     // One fixture, format picked from the extension
//!     let builder = FixtureBuilder::new()
//!         .with_render_options(RenderOptions::new().with_page_size(PageSize::A4));
//!     builder.build(ContentType::Table, 2, "with_tables.pdf")?;
//!
//!     // The whole standard set
//!     let report = fixturegen::generate_standard("test_files")?;
//!     println!("{} files, {} bytes", report.file_count(), report.total_size());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pure trees**: the same inputs always give byte-identical output
//! - **Multiple output formats**: PDF, plain text, HTML, Markdown, JSON
//! - **Standard batch**: the full fixture set in one call
//! - **`pdf` feature** (default): PDF output through `lopdf`

pub mod error;
pub mod fixture;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use fixture::{
    generate_all, generate_all_with, BatchReport, ContentType, FixtureBuilder, FixtureJob,
    FixturePlan, FixtureSource, GeneratedFile,
};
pub use model::{
    Alignment, Block, Color, Document, Drawing, Heading, InlineContent, List, ListItem, Metadata,
    Paragraph, Rect, Table, TableCell, TableRow, TableStyle, TextRun, TextStyle,
};
pub use render::{JsonFormat, OutputFormat, PageSize, RenderOptions};

use std::path::Path;

/// Build one fixture from a content-type tag with default options.
///
/// # Example
///
/// ```no_run
/// let file = fixturegen::build("text", 3, "text_only.pdf")?;
/// assert!(file.size > 0);
/// # Ok::<(), fixturegen::Error>(())
/// ```
pub fn build<P: AsRef<Path>>(tag: &str, pages: u32, path: P) -> Result<GeneratedFile> {
    FixtureBuilder::new().build_tagged(tag, pages, path)
}

/// Generate the standard fixture set into `output_dir`, creating it if needed.
pub fn generate_standard<P: AsRef<Path>>(output_dir: P) -> Result<BatchReport> {
    generate_all(&FixturePlan::standard(), &FixtureBuilder::new(), output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_tag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ocr.md");

        let file = build("ocr", 1, &path).unwrap();
        assert_eq!(file.format, OutputFormat::Markdown);
        assert!(path.exists());
    }

    #[test]
    fn test_build_unknown_tag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poster.txt");

        let result = build("poster", 1, &path);
        assert!(matches!(result, Err(Error::UnsupportedContentType(_))));
        assert!(!path.exists());
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_generate_standard() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("test_files");

        let report = generate_standard(&out).unwrap();
        assert_eq!(report.file_count(), FixturePlan::standard().len());
        assert!(report.files.iter().all(|f| f.size > 0));
        assert!(out.join("large.pdf").exists());
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn test_generate_standard_without_pdf() {
        let dir = tempdir().unwrap();

        let err = generate_standard(dir.path().join("out")).unwrap_err();
        assert!(err.is_missing_dependency());
    }
}

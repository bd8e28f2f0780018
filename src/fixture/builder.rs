//! Single-fixture builder: tree, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::content::build_tree;
use super::ContentType;
use crate::error::Result;
use crate::model::Document;
use crate::render::{self, OutputFormat, RenderOptions};

/// A file written by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Where the file was written
    pub path: PathBuf,

    /// Size in bytes
    pub size: u64,

    /// Format the tree was rendered to
    pub format: OutputFormat,
}

impl GeneratedFile {
    /// File name without the directory.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Builds fixture documents and writes them to disk.
///
/// The output format follows the target file's extension unless one is set
/// with [`FixtureBuilder::with_format`].
///
/// # Example
///
/// ```no_run
/// use fixturegen::{ContentType, FixtureBuilder};
///
/// let file = FixtureBuilder::new().build(ContentType::Table, 2, "with_tables.pdf")?;
/// println!("{} bytes", file.size);
/// # Ok::<(), fixturegen::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureBuilder {
    options: RenderOptions,
    format: Option<OutputFormat>,
}

impl FixtureBuilder {
    /// Create a builder with default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Force an output format regardless of the file extension.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Render options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Build the document tree for a content type without rendering it.
    pub fn tree(&self, content_type: ContentType, pages: u32) -> Result<Document> {
        build_tree(content_type, pages)
    }

    /// Build a fixture and write it to `path`.
    ///
    /// Nothing is written unless the tree builds and renders successfully.
    pub fn build(
        &self,
        content_type: ContentType,
        pages: u32,
        path: impl AsRef<Path>,
    ) -> Result<GeneratedFile> {
        let path = path.as_ref();
        let format = self.format_for(path)?;
        let doc = build_tree(content_type, pages)?;
        self.write_as(&doc, format, path)
    }

    /// Like [`FixtureBuilder::build`], taking the content type as a tag.
    pub fn build_tagged(
        &self,
        tag: &str,
        pages: u32,
        path: impl AsRef<Path>,
    ) -> Result<GeneratedFile> {
        let content_type: ContentType = tag.parse()?;
        self.build(content_type, pages, path)
    }

    /// Render a tree to bytes without touching the filesystem.
    pub fn render(&self, doc: &Document, format: OutputFormat) -> Result<Vec<u8>> {
        render::render(doc, format, &self.options)
    }

    /// Render any document tree and write it to `path`.
    pub fn write_document(&self, doc: &Document, path: impl AsRef<Path>) -> Result<GeneratedFile> {
        let path = path.as_ref();
        let format = self.format_for(path)?;
        self.write_as(doc, format, path)
    }

    fn format_for(&self, path: &Path) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_path(path),
        }
    }

    fn write_as(&self, doc: &Document, format: OutputFormat, path: &Path) -> Result<GeneratedFile> {
        let bytes = self.render(doc, format)?;
        fs::write(path, &bytes)?;

        log::info!("Created {} ({} bytes)", path.display(), bytes.len());
        Ok(GeneratedFile {
            path: path.to_path_buf(),
            size: bytes.len() as u64,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_build_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("text_only.txt");

        let file = FixtureBuilder::new()
            .build(ContentType::Text, 3, &path)
            .unwrap();

        assert_eq!(file.format, OutputFormat::Text);
        assert_eq!(file.file_name(), "text_only.txt");
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.len() as u64, file.size);
        assert!(written.starts_with("Test PDF - Text\n"));
        assert!(written.contains("This is page 3 of the test document."));
    }

    #[test]
    fn test_format_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixture.out");

        let file = FixtureBuilder::new()
            .with_format(OutputFormat::Markdown)
            .build(ContentType::Ocr, 1, &path)
            .unwrap();

        assert_eq!(file.format, OutputFormat::Markdown);
        assert!(fs::read_to_string(&path)
            .unwrap()
            .starts_with("# Test PDF - Ocr\n"));
    }

    #[test]
    fn test_unknown_extension_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixture.docx");

        let err = FixtureBuilder::new()
            .build(ContentType::Text, 1, &path)
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_build_tagged_rejects_unknown_tag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poster.txt");

        let err = FixtureBuilder::new()
            .build_tagged("poster", 1, &path)
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedContentType(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_zero_pages_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        let err = FixtureBuilder::new()
            .build(ContentType::Large, 0, &path)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidPageCount(0)));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("text.txt");

        let err = FixtureBuilder::new()
            .build(ContentType::Text, 1, &path)
            .unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}

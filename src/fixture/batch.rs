//! Batch plans and the sequential batch driver.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::builder::{FixtureBuilder, GeneratedFile};
use super::{content, samples, ContentType};
use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::OutputFormat;

/// Where a batch item's document tree comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixtureSource {
    /// A content-type tree with a page count
    Content {
        content_type: ContentType,
        pages: u32,
    },
    /// Minimal document around one line of content
    Simple { content: String },
    /// Text-to-PDF conversion source
    ConversionText,
    /// HTML-to-PDF conversion source
    ConversionHtml,
    /// Markdown-to-PDF conversion source
    ConversionMarkdown,
    /// Word-processor style business document
    WordLike,
    /// Spreadsheet style data table
    SpreadsheetLike,
    /// Presentation style slides
    PresentationLike,
}

impl FixtureSource {
    /// Content-type source.
    pub fn content(content_type: ContentType, pages: u32) -> Self {
        FixtureSource::Content {
            content_type,
            pages,
        }
    }

    /// Simple source.
    pub fn simple(content: impl Into<String>) -> Self {
        FixtureSource::Simple {
            content: content.into(),
        }
    }

    /// Build the document tree.
    pub fn document(&self) -> Result<Document> {
        match self {
            FixtureSource::Content {
                content_type,
                pages,
            } => content::build_tree(*content_type, *pages),
            FixtureSource::Simple { content } => Ok(samples::simple_document(content)),
            FixtureSource::ConversionText => Ok(samples::conversion_text()),
            FixtureSource::ConversionHtml => Ok(samples::conversion_html()),
            FixtureSource::ConversionMarkdown => Ok(samples::conversion_markdown()),
            FixtureSource::WordLike => Ok(samples::word_like()),
            FixtureSource::SpreadsheetLike => Ok(samples::spreadsheet_like()),
            FixtureSource::PresentationLike => Ok(samples::presentation_like()),
        }
    }
}

/// One file in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureJob {
    /// File name inside the output directory; its extension picks the format
    pub file_name: String,

    /// Tree to render
    pub source: FixtureSource,
}

impl FixtureJob {
    /// Create a job.
    pub fn new(file_name: impl Into<String>, source: FixtureSource) -> Self {
        Self {
            file_name: file_name.into(),
            source,
        }
    }
}

/// An ordered list of fixtures to generate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FixturePlan {
    jobs: Vec<FixtureJob>,
}

impl FixturePlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard fixture set used by the processing platform's tests.
    pub fn standard() -> Self {
        use ContentType::*;

        Self::new()
            .job("simple.pdf", FixtureSource::simple("Basic test content"))
            .job("simple2.pdf", FixtureSource::simple("Another basic test"))
            .job("multipage.pdf", FixtureSource::content(Text, 5))
            .job("text_only.pdf", FixtureSource::content(Text, 3))
            .job("with_images.pdf", FixtureSource::content(Image, 2))
            .job("with_tables.pdf", FixtureSource::content(Table, 2))
            .job("metadata_test.pdf", FixtureSource::content(Metadata, 1))
            .job("encryption_test.pdf", FixtureSource::content(Encrypted, 2))
            .job("watermark_test.pdf", FixtureSource::content(Watermark, 2))
            .job("comparison_test1.pdf", FixtureSource::content(Comparison, 3))
            .job("comparison_test2.pdf", FixtureSource::content(Comparison, 3))
            .job("ocr_test.pdf", FixtureSource::content(Ocr, 2))
            .job("large.pdf", FixtureSource::content(Large, 50))
            .job("test_text.txt", FixtureSource::ConversionText)
            .job("test_html.html", FixtureSource::ConversionHtml)
            .job("test_markdown.md", FixtureSource::ConversionMarkdown)
            .job("test_document.pdf", FixtureSource::WordLike)
            .job("test_spreadsheet.pdf", FixtureSource::SpreadsheetLike)
            .job("test_presentation.pdf", FixtureSource::PresentationLike)
            .job("test1.pdf", FixtureSource::simple("Test file 1"))
            .job("test2.pdf", FixtureSource::simple("Test file 2"))
            .job("test3.pdf", FixtureSource::simple("Test file 3"))
    }

    /// Append a job and return self.
    pub fn job(mut self, file_name: impl Into<String>, source: FixtureSource) -> Self {
        self.push(FixtureJob::new(file_name, source));
        self
    }

    /// Append a job.
    pub fn push(&mut self, job: FixtureJob) {
        self.jobs.push(job);
    }

    /// Jobs in generation order.
    pub fn jobs(&self) -> &[FixtureJob] {
        &self.jobs
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Check if the plan has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Files written by a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Directory the batch wrote into
    pub output_dir: PathBuf,

    /// Written files, sorted by file name
    pub files: Vec<GeneratedFile>,
}

impl BatchReport {
    /// Number of files written.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Sum of file sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Generate every job of `plan` into `output_dir`.
pub fn generate_all(
    plan: &FixturePlan,
    builder: &FixtureBuilder,
    output_dir: impl AsRef<Path>,
) -> Result<BatchReport> {
    generate_all_with(plan, builder, output_dir, |_| {})
}

/// Generate every job of `plan`, calling `on_file` after each file is written.
///
/// Jobs run one after another. Formats are checked before anything is
/// written, and the first failing job stops the batch with
/// [`Error::Generation`].
pub fn generate_all_with<F>(
    plan: &FixturePlan,
    builder: &FixtureBuilder,
    output_dir: impl AsRef<Path>,
    mut on_file: F,
) -> Result<BatchReport>
where
    F: FnMut(&GeneratedFile),
{
    let output_dir = output_dir.as_ref();

    for job in plan.jobs() {
        let path = output_dir.join(&job.file_name);
        let format =
            OutputFormat::from_path(&path).map_err(|e| Error::generation(&path, e))?;
        format
            .ensure_available()
            .map_err(|e| Error::generation(&path, e))?;
    }

    fs::create_dir_all(output_dir)?;
    log::info!(
        "Generating {} fixtures into {}",
        plan.len(),
        output_dir.display()
    );

    let mut files = Vec::with_capacity(plan.len());
    for job in plan.jobs() {
        let path = output_dir.join(&job.file_name);
        let file = job
            .source
            .document()
            .and_then(|doc| builder.write_document(&doc, &path))
            .map_err(|e| Error::generation(&path, e))?;
        on_file(&file);
        files.push(file);
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(BatchReport {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}

//! Document trees for each content type.
//!
//! Every tree opens with a centred blue title and a short spacer, then adds
//! the body for its content type. Building is pure: the same content type and
//! page count always yield the same tree.

use chrono::DateTime;

use super::ContentType;
use crate::error::{Error, Result};
use crate::model::{
    Alignment, Color, Document, Drawing, Heading, Paragraph, Rect, Table, TableStyle,
};

/// Points per inch.
pub(crate) const INCH: f32 = 72.0;

/// Written as the creator of every generated document.
pub(crate) const CREATOR: &str = "fixturegen";

pub(crate) const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";
pub(crate) const DIGITS: &str = "1234567890";
pub(crate) const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Lines per page in the `large` fixture.
const LARGE_LINES_PER_PAGE: u32 = 20;

/// Creation date pinned on the metadata fixture (2024-01-01T00:00:00Z).
const METADATA_CREATED: i64 = 1_704_067_200;

/// Build the document tree for a content type.
pub fn build_tree(content_type: ContentType, pages: u32) -> Result<Document> {
    if pages == 0 {
        return Err(Error::InvalidPageCount(pages));
    }

    let mut doc = titled_document(content_type);
    match content_type {
        ContentType::Text => text_body(&mut doc, pages),
        ContentType::Image => image_body(&mut doc),
        ContentType::Table => table_body(&mut doc),
        ContentType::Metadata => metadata_body(&mut doc),
        ContentType::Encrypted => repeated_body(
            &mut doc,
            "PDF for Encryption Testing",
            "This PDF will be encrypted with a password for testing decryption.",
            pages,
            |i| format!("Content for encryption test - page {}", i),
        ),
        ContentType::Watermark => repeated_body(
            &mut doc,
            "PDF for Watermark Testing",
            "This PDF will have a watermark added for testing.",
            pages,
            |i| format!("Content page {} - watermark will be added", i),
        ),
        ContentType::Comparison => repeated_body(
            &mut doc,
            "PDF for Comparison Testing",
            "This PDF will be compared with another similar PDF.",
            pages,
            |i| format!("Comparison content - page {}", i),
        ),
        ContentType::Ocr => ocr_body(&mut doc),
        ContentType::Large => large_body(&mut doc, pages),
    }

    log::debug!(
        "Built {} tree: {} pages, {} blocks",
        content_type,
        pages,
        doc.block_count()
    );
    Ok(doc)
}

fn titled_document(content_type: ContentType) -> Document {
    let title = format!("Test PDF - {}", content_type.title());
    let mut doc = Document::titled(title.clone());
    doc.metadata.creator = Some(CREATOR.to_string());
    doc.add_heading(
        Heading::new(title, 1)
            .align(Alignment::Center)
            .color(Color::BLUE),
    );
    doc.add_spacer(0.2 * INCH);
    doc
}

/// Section heading followed by the standard gap.
fn section(doc: &mut Document, text: &str) {
    doc.add_heading(Heading::new(text, 2));
    doc.add_spacer(0.2 * INCH);
}

fn text_body(doc: &mut Document, pages: u32) {
    for i in 1..=pages {
        doc.add_paragraph(
            Paragraph::with_text(format!(
                "This is page {} of the test document. \
                 This PDF contains sample text content that can be used for \
                 extracting text, OCR testing, and other text-based operations. \
                 {}. Numbers: {}. Special chars: !@#$%^&*()",
                i, PANGRAM, DIGITS
            ))
            .align(Alignment::Justify),
        );
        if i < pages {
            doc.add_spacer(0.5 * INCH);
        }
    }
}

fn image_body(doc: &mut Document) {
    section(doc, "PDF with Embedded Images");
    doc.add_drawing(
        Drawing::new(400.0, 200.0)
            .with_rect(
                Rect::new(50.0, 50.0, 300.0, 100.0)
                    .fill(Color::RED)
                    .stroke(Color::BLACK, 2.0),
            )
            .with_rect(
                Rect::new(100.0, 75.0, 200.0, 50.0)
                    .fill(Color::BLUE)
                    .stroke(Color::BLACK, 2.0),
            ),
    );
    doc.add_spacer(0.3 * INCH);
    doc.add_paragraph(Paragraph::with_text(
        "This PDF contains graphical elements for image extraction testing.",
    ));
}

fn table_body(doc: &mut Document) {
    section(doc, "PDF with Tables");
    let style = TableStyle {
        header_background: Some(Color::GREEN),
        header_text: Color::BLACK,
        body_background: Some(Color::WHITE),
        grid: Some(Color::BLACK),
        alignment: Alignment::Center,
        header_font_size: 12.0,
        body_font_size: 10.0,
    };
    doc.add_table(
        Table::from_rows(
            ["ID", "Name", "Value", "Status"],
            [
                ["1", "Item A", "100", "Active"],
                ["2", "Item B", "200", "Inactive"],
                ["3", "Item C", "300", "Active"],
                ["4", "Item D", "400", "Pending"],
            ],
        )
        .styled(style),
    );
    doc.add_spacer(0.3 * INCH);
    doc.add_paragraph(Paragraph::with_text(
        "This PDF contains tables for extraction and conversion testing.",
    ));
}

fn metadata_body(doc: &mut Document) {
    doc.metadata.title = Some("Test Metadata PDF".to_string());
    doc.metadata.author = Some("Test Author".to_string());
    doc.metadata.subject = Some("Testing".to_string());
    doc.metadata.keywords = Some("test, metadata, fixture".to_string());
    doc.metadata.created = DateTime::from_timestamp(METADATA_CREATED, 0);

    section(doc, "PDF with Metadata");
    doc.add_paragraph(Paragraph::with_text(
        "This PDF has custom metadata that can be extracted and edited. \
         Author: Test Author, Title: Test Metadata PDF, Subject: Testing",
    ));
}

/// Heading, intro paragraph, then one line per page.
fn repeated_body(
    doc: &mut Document,
    heading: &str,
    intro: &str,
    pages: u32,
    line: impl Fn(u32) -> String,
) {
    section(doc, heading);
    doc.add_paragraph(Paragraph::with_text(intro));
    for i in 1..=pages {
        doc.add_paragraph(Paragraph::with_text(line(i)));
    }
}

fn ocr_body(doc: &mut Document) {
    section(doc, "Simulated Scanned Document");
    doc.add_paragraph(Paragraph::with_text(
        "This PDF simulates a scanned document for OCR testing. \
         In real scenarios, this would be an image-based PDF.",
    ));
    doc.add_spacer(0.5 * INCH);
    doc.add_heading(Heading::new("OCR TEST TEXT:", 3));
    for line in [PANGRAM, DIGITS, UPPERCASE, LOWERCASE] {
        doc.add_paragraph(Paragraph::with_text(line));
    }
}

fn large_body(doc: &mut Document, pages: u32) {
    section(doc, "Large PDF for Performance Testing");
    for i in 0..pages {
        doc.add_heading(Heading::new(format!("Page {} of {}", i + 1, pages), 3));
        for j in 0..LARGE_LINES_PER_PAGE {
            doc.add_paragraph(Paragraph::with_text(format!(
                "Line {}: This is a long line of text to fill up the PDF and make it \
                 larger for performance testing. {}. Numbers: {}.",
                j + 1,
                PANGRAM,
                u64::from(i) * 1000 + u64::from(j)
            )));
        }
        if i + 1 < pages {
            doc.add_spacer(0.5 * INCH);
        }
    }
}

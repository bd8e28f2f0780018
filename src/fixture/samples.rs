//! Fixed sample documents: minimal PDFs, conversion sources and office-like pages.

use super::content::{CREATOR, DIGITS, INCH, LOWERCASE, PANGRAM, UPPERCASE};
use crate::model::{
    Alignment, Block, Color, Document, Heading, List, ListItem, Paragraph, Table, TableStyle,
    TextRun,
};

fn sample(title: &str) -> Document {
    let mut doc = Document::titled(title);
    doc.metadata.creator = Some(CREATOR.to_string());
    doc
}

/// A minimal one-page document around a single content line.
pub fn simple_document(content: &str) -> Document {
    let mut doc = sample("Simple Test PDF");
    doc.add_heading(Heading::new("Simple Test PDF", 3));
    doc.add_paragraph(Paragraph::with_text(content));
    doc.add_paragraph(Paragraph::with_text(
        "This is a minimal PDF for basic testing.",
    ));
    doc
}

/// Source document for text-to-PDF conversion.
pub fn conversion_text() -> Document {
    let mut doc = sample("Test Text File for PDF Conversion");
    doc.add_heading(Heading::new("Test Text File for PDF Conversion", 1));
    doc.add_paragraph(Paragraph::with_lines([
        "This is a test text file that will be converted to PDF.",
        "It contains multiple lines of text.",
    ]));
    doc.add_paragraph(Paragraph::with_lines([
        format!("Line 1: {}.", PANGRAM),
        format!("Line 2: Numbers: {}", DIGITS),
        "Line 3: Special chars: !@#$%^&*()".to_string(),
        format!("Line 4: {}", UPPERCASE),
        format!("Line 5: {}", LOWERCASE),
    ]));
    doc.add_paragraph(Paragraph::with_text(
        "This file can be used to test the text-to-PDF conversion tool.",
    ));
    doc
}

/// Source document for HTML-to-PDF conversion.
pub fn conversion_html() -> Document {
    let mut doc = sample("Test HTML for PDF Conversion");
    doc.add_heading(Heading::new("Test HTML Document", 1));
    doc.add_paragraph(Paragraph::with_text(
        "This HTML file will be converted to PDF using the HTML-to-PDF tool.",
    ));

    doc.add_heading(Heading::new("Text Content", 2));
    doc.add_paragraph(Paragraph::with_text(format!(
        "{}. This is a standard pangram used for testing fonts and text rendering.",
        PANGRAM
    )));

    doc.add_heading(Heading::new("Formatted Text", 2));
    doc.add_paragraph(
        Paragraph::new()
            .text("This is ")
            .run(TextRun::bold("bold text"))
            .text(", this is ")
            .run(TextRun::italic("italic text"))
            .text(", and this is ")
            .run(TextRun::highlight("highlighted text"))
            .text("."),
    );

    doc.add_heading(Heading::new("Table Example", 2));
    doc.add_table(Table::from_rows(
        ["ID", "Name", "Value"],
        [
            ["1", "Item A", "100"],
            ["2", "Item B", "200"],
            ["3", "Item C", "300"],
        ],
    ));

    doc.add_heading(Heading::new("List Example", 2));
    doc.add_block(Block::List(
        List::unordered()
            .text_item("First item in unordered list")
            .text_item("Second item in unordered list")
            .text_item("Third item in unordered list"),
    ));
    doc.add_block(Block::List(
        List::ordered()
            .text_item("First item in ordered list")
            .text_item("Second item in ordered list")
            .text_item("Third item in ordered list"),
    ));

    doc.add_heading(Heading::new("Code Block", 2));
    doc.add_block(Block::code(
        Some("javascript"),
        "function test() {\n    console.log(\"Hello, World!\");\n    return true;\n}",
    ));

    doc.add_paragraph(Paragraph::new().run(TextRun::bold("End of HTML document.")));
    doc
}

/// Source document for Markdown-to-PDF conversion.
pub fn conversion_markdown() -> Document {
    let mut doc = sample("Test Markdown Document");
    doc.add_heading(Heading::new("Test Markdown Document", 1));
    doc.add_paragraph(Paragraph::with_text(
        "This Markdown file will be converted to PDF using the Markdown-to-PDF tool.",
    ));

    doc.add_heading(Heading::new("Text Content", 2));
    doc.add_paragraph(Paragraph::with_text(format!(
        "{}. This is a standard pangram used for testing.",
        PANGRAM
    )));

    doc.add_heading(Heading::new("Formatted Text", 2));
    doc.add_block(Block::List(
        List::unordered()
            .item(ListItem::new(Paragraph::new().run(TextRun::bold("Bold text"))))
            .item(ListItem::new(Paragraph::new().run(TextRun::italic("Italic text"))))
            .item(ListItem::new(
                Paragraph::new().run(TextRun::strikethrough("Strikethrough text")),
            ))
            .item(ListItem::new(Paragraph::new().run(TextRun::code("Inline code")))),
    ));

    doc.add_heading(Heading::new("Lists", 2));
    doc.add_heading(Heading::new("Unordered List", 3));
    doc.add_block(Block::List(
        List::unordered()
            .text_item("Item 1")
            .item(
                ListItem::new(Paragraph::with_text("Item 2"))
                    .child("Nested item 2.1")
                    .child("Nested item 2.2"),
            )
            .text_item("Item 3"),
    ));
    doc.add_heading(Heading::new("Ordered List", 3));
    doc.add_block(Block::List(
        List::ordered()
            .text_item("First item")
            .item(
                ListItem::new(Paragraph::with_text("Second item"))
                    .child("Nested item 2.1")
                    .child("Nested item 2.2"),
            )
            .text_item("Third item"),
    ));

    doc.add_heading(Heading::new("Code Block", 2));
    doc.add_block(Block::code(
        Some("python"),
        "def hello_world():\n    print(\"Hello, World!\")\n    return True",
    ));

    doc.add_heading(Heading::new("Table", 2));
    doc.add_table(Table::from_rows(
        ["ID", "Name", "Value", "Status"],
        [
            ["1", "Item A", "100", "Active"],
            ["2", "Item B", "200", "Inactive"],
            ["3", "Item C", "300", "Active"],
        ],
    ));

    doc.add_heading(Heading::new("Blockquote", 2));
    doc.add_block(Block::BlockQuote(Paragraph::with_lines([
        "This is a blockquote.",
        "It can span multiple lines.",
        "Used for quoting text.",
    ])));

    doc.add_heading(Heading::new("Horizontal Rule", 2));
    doc.add_block(Block::HorizontalRule);

    doc.add_heading(Heading::new("Links and Images", 2));
    let mut link = Paragraph::new();
    link.add_link("Example Link", "https://example.com");
    doc.add_paragraph(link);
    doc.add_paragraph(Paragraph::new().run(TextRun::italic(
        "Note: Images won't be rendered in PDF conversion, but links will be preserved.",
    )));

    doc.add_heading(Heading::new("End of Document", 2));
    doc.add_paragraph(Paragraph::with_text(
        "This concludes the test Markdown document.",
    ));
    doc
}

/// A business document with sections, standing in for a word-processor export.
pub fn word_like() -> Document {
    let mut doc = sample("Business Document Template");
    doc.add_heading(Heading::new("Business Document Template", 1).align(Alignment::Center));
    doc.add_spacer(0.3 * INCH);

    doc.add_heading(Heading::new("Executive Summary", 1));
    doc.add_paragraph(Paragraph::with_text(
        "This document represents a typical business document that would be \
         created in Microsoft Word and converted to PDF format.",
    ));
    doc.add_spacer(0.2 * INCH);

    doc.add_heading(Heading::new("Section 1: Introduction", 2));
    doc.add_paragraph(Paragraph::with_text(
        "The purpose of this document is to test the Word-to-PDF conversion \
         capabilities of the PDF Processing Platform.",
    ));
    doc.add_spacer(0.2 * INCH);

    doc.add_heading(Heading::new("Section 2: Requirements", 2));
    doc.add_block(Block::List(
        List::ordered()
            .text_item("Test all conversion tools")
            .text_item("Verify output quality")
            .text_item("Measure processing time")
            .text_item("Validate metadata preservation"),
    ));
    doc.add_spacer(0.2 * INCH);

    doc.add_heading(Heading::new("Section 3: Conclusion", 2));
    doc.add_paragraph(Paragraph::with_text(
        "This document successfully demonstrates the conversion capabilities.",
    ));
    doc
}

/// Quarterly figures in a grid, standing in for a spreadsheet export.
pub fn spreadsheet_like() -> Document {
    let mut doc = sample("Spreadsheet Data Template");
    doc.add_heading(Heading::new("Spreadsheet Data Template", 1).align(Alignment::Center));
    doc.add_spacer(0.3 * INCH);

    let style = TableStyle {
        header_background: Some(Color::rgb(0.2, 0.4, 0.8)),
        header_text: Color::WHITE,
        body_background: Some(Color::gray(0.95)),
        grid: Some(Color::gray(0.5)),
        alignment: Alignment::Center,
        header_font_size: 10.0,
        body_font_size: 9.0,
    };
    doc.add_table(
        Table::from_rows(
            ["Product", "Q1", "Q2", "Q3", "Q4", "Total"],
            [
                ["Widget A", "100", "120", "110", "130", "460"],
                ["Widget B", "200", "210", "220", "230", "860"],
                ["Widget C", "150", "160", "170", "180", "660"],
                ["Widget D", "300", "310", "320", "330", "1260"],
                ["Total", "750", "800", "820", "870", "3240"],
            ],
        )
        .styled(style),
    );
    doc.add_spacer(0.3 * INCH);
    doc.add_paragraph(Paragraph::with_text(
        "This PDF contains spreadsheet-style data for conversion testing.",
    ));
    doc
}

/// Three slides, one per page, standing in for a presentation export.
pub fn presentation_like() -> Document {
    let mut doc = sample("Presentation Title Slide");
    doc.add_heading(Heading::new("Presentation Title Slide", 1).align(Alignment::Center));
    doc.add_spacer(0.5 * INCH);
    doc.add_heading(Heading::new("PDF Processing Platform Demo", 1));
    doc.add_paragraph(Paragraph::with_text("Version 1.0"));

    let slides: [(&str, &[&str]); 2] = [
        (
            "Slide 2: Features",
            &[
                "32 PDF Tools",
                "Async Processing",
                "REST API",
                "Docker Support",
                "OpenAPI Documentation",
            ],
        ),
        (
            "Slide 3: Technology Stack",
            &[
                "Spring Boot 3.5.9",
                "Java 21",
                "Apache PDFBox",
                "OpenPDF",
                "Tess4J",
                "LibreOffice",
            ],
        ),
    ];
    for (title, bullets) in slides {
        doc.add_block(Block::PageBreak);
        doc.add_heading(Heading::new(title, 2));
        doc.add_spacer(0.2 * INCH);
        doc.add_paragraph(Paragraph::with_lines(
            bullets.iter().map(|b| format!("\u{2022} {}", b)),
        ));
    }
    doc
}

//! Integration tests for PDF output, checked by re-reading the bytes with lopdf.

#![cfg(feature = "pdf")]

use fixturegen::fixture::samples;
use fixturegen::render::{render, to_pdf};
use fixturegen::{ContentType, FixtureBuilder, OutputFormat, PageSize, RenderOptions};
use lopdf::content::Content;
use lopdf::{Dictionary, Object};
use tempfile::tempdir;

fn pdf_for(content_type: ContentType, pages: u32) -> Vec<u8> {
    let doc = FixtureBuilder::new().tree(content_type, pages).unwrap();
    to_pdf(&doc, &RenderOptions::default()).unwrap()
}

fn load(bytes: &[u8]) -> lopdf::Document {
    lopdf::Document::load_mem(bytes).unwrap()
}

/// Text shown on each page, text objects separated by spaces.
fn page_text(pdf: &lopdf::Document) -> Vec<String> {
    pdf.get_pages()
        .values()
        .map(|&page_id| {
            let data = pdf.get_page_content(page_id).unwrap();
            let content = Content::decode(&data).unwrap();
            let mut text = String::new();
            for op in &content.operations {
                match op.operator.as_str() {
                    "BT" if !text.is_empty() => text.push(' '),
                    "Tj" => {
                        if let Some(Ok(bytes)) = op.operands.first().map(Object::as_str) {
                            text.push_str(&String::from_utf8_lossy(bytes));
                        }
                    }
                    _ => {}
                }
            }
            text
        })
        .collect()
}

fn operators(pdf: &lopdf::Document) -> Vec<String> {
    let mut ops = Vec::new();
    for &page_id in pdf.get_pages().values() {
        let data = pdf.get_page_content(page_id).unwrap();
        let content = Content::decode(&data).unwrap();
        ops.extend(content.operations.into_iter().map(|op| op.operator));
    }
    ops
}

fn info(pdf: &lopdf::Document) -> &Dictionary {
    let id = pdf.trailer.get(b"Info").unwrap().as_reference().unwrap();
    pdf.get_dictionary(id).unwrap()
}

#[test]
fn test_every_content_type_is_a_valid_pdf() {
    for ct in ContentType::ALL {
        let bytes = pdf_for(ct, 2);
        let pdf = load(&bytes);

        assert!(!pdf.get_pages().is_empty(), "{} has no pages", ct);
        let text = page_text(&pdf).join(" ");
        assert!(text.contains(&format!("Test PDF - {}", ct.title())));
    }
}

#[test]
fn test_pdf_is_byte_identical_across_runs() {
    for ct in ContentType::ALL {
        assert_eq!(pdf_for(ct, 2), pdf_for(ct, 2));
    }
}

#[test]
fn test_large_page_count_and_size_grow() {
    let small = pdf_for(ContentType::Large, 2);
    let big = pdf_for(ContentType::Large, 10);

    assert!(big.len() > small.len());
    assert!(load(&big).get_pages().len() > load(&small).get_pages().len());

    let text = page_text(&load(&big)).join(" ");
    assert!(text.contains("Page 10 of 10"));
    assert!(text.contains("Numbers: 9019."));
}

#[test]
fn test_text_fixture_content() {
    let pdf = load(&pdf_for(ContentType::Text, 3));
    let text = page_text(&pdf).join(" ");

    for i in 1..=3 {
        assert!(text.contains(&format!("This is page {} of the test document.", i)));
    }
}

#[test]
fn test_table_fixture_draws_cells() {
    let pdf = load(&pdf_for(ContentType::Table, 2));
    let text = page_text(&pdf).join(" ");

    for cell in ["ID", "Status", "Item D", "Pending"] {
        assert!(text.contains(cell), "missing {}", cell);
    }
    let ops = operators(&pdf);
    assert!(ops.iter().any(|op| op == "re"));
    assert!(ops.iter().any(|op| op == "S"));
}

#[test]
fn test_image_fixture_draws_rectangles() {
    let ops = operators(&load(&pdf_for(ContentType::Image, 1)));

    assert!(ops.iter().filter(|op| *op == "re").count() >= 2);
    assert!(ops.iter().any(|op| op == "B"));
}

#[test]
fn test_metadata_fixture_info_dictionary() {
    let pdf = load(&pdf_for(ContentType::Metadata, 1));
    let info = info(&pdf);

    assert_eq!(
        info.get(b"Title").unwrap().as_str().unwrap(),
        b"Test Metadata PDF"
    );
    assert_eq!(info.get(b"Author").unwrap().as_str().unwrap(), b"Test Author");
    assert_eq!(info.get(b"Subject").unwrap().as_str().unwrap(), b"Testing");
    assert_eq!(
        info.get(b"CreationDate").unwrap().as_str().unwrap(),
        b"D:20240101000000+00'00'"
    );
}

#[test]
fn test_other_fixtures_carry_no_dates() {
    let pdf = load(&pdf_for(ContentType::Watermark, 2));
    let info = info(&pdf);

    assert_eq!(info.get(b"Creator").unwrap().as_str().unwrap(), b"fixturegen");
    assert!(info.get(b"CreationDate").is_err());
}

#[test]
fn test_page_size_option() {
    let doc = FixtureBuilder::new().tree(ContentType::Ocr, 1).unwrap();
    let options = RenderOptions::new().with_page_size(PageSize::A4);
    let pdf = load(&render(&doc, OutputFormat::Pdf, &options).unwrap());

    let page_id = *pdf.get_pages().values().next().unwrap();
    let page = pdf.get_dictionary(page_id).unwrap();
    let media_box: Vec<f32> = page
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o.as_float().unwrap())
        .collect();
    assert_eq!(media_box, vec![0.0, 0.0, 595.0, 842.0]);
}

#[test]
fn test_presentation_has_one_page_per_slide() {
    let doc = samples::presentation_like();
    let pdf = load(&to_pdf(&doc, &RenderOptions::default()).unwrap());

    assert_eq!(pdf.get_pages().len(), 3);
    let pages = page_text(&pdf);
    assert!(pages[1].contains("Slide 2: Features"));
    assert!(pages[2].contains("Tess4J"));
}

#[test]
fn test_compressed_output_still_loads() {
    let doc = FixtureBuilder::new().tree(ContentType::Large, 3).unwrap();
    let plain = to_pdf(&doc, &RenderOptions::default()).unwrap();
    let packed = to_pdf(&doc, &RenderOptions::new().with_compression(true)).unwrap();

    assert!(packed.len() < plain.len());
    assert_eq!(
        load(&packed).get_pages().len(),
        load(&plain).get_pages().len()
    );
}

#[test]
fn test_build_writes_pdf_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("with_tables.pdf");

    let file = FixtureBuilder::new()
        .build(ContentType::Table, 2, &path)
        .unwrap();

    assert_eq!(file.format, OutputFormat::Pdf);
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert_eq!(bytes.len() as u64, file.size);
}

//! Integration tests for the fixture builder.

use std::fs;

use fixturegen::{Block, ContentType, Error, FixtureBuilder, OutputFormat};
use tempfile::tempdir;

#[test]
fn test_every_content_type_writes_non_empty_file() {
    let dir = tempdir().unwrap();
    let builder = FixtureBuilder::new();

    for format in [OutputFormat::Text, OutputFormat::Markdown, OutputFormat::Html] {
        for ct in ContentType::ALL {
            let path = dir
                .path()
                .join(format!("{}.{}", ct, format.extension()));
            let file = builder.build(ct, 2, &path).unwrap();

            assert_eq!(file.format, format);
            assert!(file.size > 0, "{} is empty", path.display());
            assert_eq!(fs::metadata(&path).unwrap().len(), file.size);
        }
    }
}

#[test]
fn test_build_is_idempotent() {
    let dir = tempdir().unwrap();
    let builder = FixtureBuilder::new();

    for ct in ContentType::ALL {
        let first = dir.path().join(format!("{}_1.html", ct));
        let second = dir.path().join(format!("{}_2.html", ct));
        builder.build(ct, 3, &first).unwrap();
        builder.build(ct, 3, &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }
}

#[test]
fn test_large_output_grows_with_pages() {
    let dir = tempdir().unwrap();
    let builder = FixtureBuilder::new();

    let mut last = 0;
    for pages in [1, 2, 5, 10] {
        let path = dir.path().join(format!("large_{}.txt", pages));
        let file = builder.build(ContentType::Large, pages, &path).unwrap();
        assert!(file.size > last);
        last = file.size;
    }
}

#[test]
fn test_unsupported_tag_writes_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("poster.txt");

    let err = FixtureBuilder::new()
        .build_tagged("poster", 1, &path)
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedContentType(ref tag) if tag == "poster"));
    assert!(!path.exists());
}

#[test]
fn test_tags_are_case_insensitive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.md");

    let file = FixtureBuilder::new()
        .build_tagged("Table", 1, &path)
        .unwrap();
    assert_eq!(file.format, OutputFormat::Markdown);
}

#[test]
fn test_text_tree_has_one_paragraph_per_page() {
    let doc = FixtureBuilder::new().tree(ContentType::Text, 3).unwrap();
    let paragraphs: Vec<_> = doc.paragraphs().map(|p| p.plain_text()).collect();

    assert_eq!(paragraphs.len(), 3);
    for (i, text) in paragraphs.iter().enumerate() {
        assert!(text.contains(&format!("This is page {} of", i + 1)));
    }
}

#[test]
fn test_table_tree_has_single_table() {
    let doc = FixtureBuilder::new().tree(ContentType::Table, 2).unwrap();
    let tables: Vec<_> = doc.tables().collect();

    assert_eq!(tables.len(), 1);
    assert_eq!(
        tables[0].to_strings()[0],
        vec!["ID", "Name", "Value", "Status"]
    );
    assert_eq!(tables[0].body().len(), 4);
}

#[test]
fn test_zero_pages_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("none.txt");

    let err = FixtureBuilder::new()
        .build(ContentType::Comparison, 0, &path)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidPageCount(0)));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_path_is_io_error() {
    let dir = tempdir().unwrap();
    // A regular file cannot act as a directory.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"x").unwrap();

    let err = FixtureBuilder::new()
        .build(ContentType::Text, 1, blocker.join("text.txt"))
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_json_output_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metadata.json");

    FixtureBuilder::new()
        .build(ContentType::Metadata, 1, &path)
        .unwrap();

    let json = fs::read_to_string(&path).unwrap();
    let doc: fixturegen::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(doc.metadata.author.as_deref(), Some("Test Author"));
    assert!(matches!(doc.blocks[0], Block::Heading(_)));
}

#[cfg(not(feature = "pdf"))]
#[test]
fn test_pdf_without_feature_is_missing_dependency() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("text.pdf");

    let err = FixtureBuilder::new()
        .build(ContentType::Text, 1, &path)
        .unwrap_err();

    assert!(err.is_missing_dependency());
    assert!(!path.exists());
}

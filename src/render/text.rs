//! Plain text rendering for document trees.

use crate::error::Result;
use crate::model::{Block, Document, InlineContent, ListItem, Paragraph};

use super::RenderOptions;

/// Convert a document to plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for block in &doc.blocks {
        render_block(&mut output, block, options);
    }

    let mut output = output.trim_end().to_string();
    output.push('\n');
    Ok(output)
}

fn render_block(output: &mut String, block: &Block, options: &RenderOptions) {
    match block {
        Block::Heading(h) => {
            output.push_str(&h.text);
            output.push('\n');
            match h.level {
                1 => output.push_str(&"=".repeat(options.rule_width)),
                2 => output.push_str(&"-".repeat(options.rule_width)),
                _ => {}
            }
            if h.level <= 2 {
                output.push('\n');
            }
            output.push('\n');
        }
        Block::Paragraph(p) => {
            output.push_str(&inline_text(p));
            output.push_str("\n\n");
        }
        Block::Table(t) => {
            output.push_str(&t.plain_text());
            output.push_str("\n\n");
        }
        Block::Shape(d) => {
            output.push_str(&d.describe());
            output.push_str("\n\n");
        }
        Block::List(list) => {
            render_items(output, &list.items, list.ordered, 0, options);
            output.push('\n');
        }
        Block::CodeBlock { code, .. } => {
            for line in code.lines() {
                output.push_str("    ");
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }
        Block::BlockQuote(p) => {
            for line in inline_text(p).lines() {
                output.push_str("> ");
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }
        Block::HorizontalRule => {
            output.push_str(&"-".repeat(options.rule_width));
            output.push_str("\n\n");
        }
        Block::Spacer { .. } | Block::PageBreak => {}
    }
}

fn render_items(
    output: &mut String,
    items: &[ListItem],
    ordered: bool,
    level: usize,
    options: &RenderOptions,
) {
    for (i, item) in items.iter().enumerate() {
        output.push_str(&"  ".repeat(level));
        if ordered {
            output.push_str(&format!("{}. ", i + 1));
        } else {
            output.push(options.list_marker);
            output.push(' ');
        }
        output.push_str(&inline_text(&item.content));
        output.push('\n');
        render_items(output, &item.children, ordered, level + 1, options);
    }
}

/// Flatten inline content, keeping hard line breaks.
fn inline_text(para: &Paragraph) -> String {
    para.content
        .iter()
        .map(|c| match c {
            InlineContent::Text(run) => run.text.clone(),
            InlineContent::LineBreak => "\n".to_string(),
            InlineContent::Link { text, url } => format!("{} <{}>", text, url),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Heading, List, Table};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Hello, world!"));
        doc.add_paragraph(Paragraph::with_text("Second paragraph."));

        let result = to_text(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(result, "Hello, world!\n\nSecond paragraph.\n");
    }

    #[test]
    fn test_heading_underline() {
        let mut doc = Document::new();
        doc.add_heading(Heading::new("Title", 1));
        doc.add_paragraph(Paragraph::with_lines(["Line 1", "Line 2"]));

        let options = RenderOptions::default().with_rule_width(5);
        let result = to_text(&doc, &options).unwrap();
        assert_eq!(result, "Title\n=====\n\nLine 1\nLine 2\n");
    }

    #[test]
    fn test_lists_and_tables() {
        let mut doc = Document::new();
        doc.add_block(Block::List(List::ordered().text_item("a").text_item("b")));
        doc.add_table(Table::from_rows(["ID", "Name"], [["1", "A"]]));

        let result = to_text(&doc, &RenderOptions::default()).unwrap();
        assert!(result.contains("1. a\n2. b\n"));
        assert!(result.contains("ID\tName\n1\tA"));
    }
}

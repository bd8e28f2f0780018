//! Block-level content types.

use super::{Alignment, Color, Drawing, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A content block in a document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A section heading
    Heading(Heading),

    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A drawing made of simple shapes
    Shape(Drawing),

    /// Vertical whitespace
    Spacer {
        /// Height in points
        height: f32,
    },

    /// An ordered or unordered list
    List(List),

    /// Preformatted source code
    CodeBlock {
        /// Language hint for fenced output
        language: Option<String>,
        /// Code text, lines separated by `\n`
        code: String,
    },

    /// A quotation
    BlockQuote(Paragraph),

    /// A horizontal rule / separator
    HorizontalRule,

    /// Forced page break
    PageBreak,
}

impl Block {
    /// Create a heading block.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading(Heading::new(text, level))
    }

    /// Create a paragraph block with plain text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph::with_text(text))
    }

    /// Create a spacer of the given height in points.
    pub fn spacer(height: f32) -> Self {
        Block::Spacer { height }
    }

    /// Create a code block.
    pub fn code(language: Option<&str>, code: impl Into<String>) -> Self {
        Block::CodeBlock {
            language: language.map(str::to_string),
            code: code.into(),
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a drawing.
    pub fn is_shape(&self) -> bool {
        matches!(self, Block::Shape(_))
    }

    /// Get plain text content of the block, if it carries any.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Heading(h) => Some(h.text.clone()),
            Block::Paragraph(p) | Block::BlockQuote(p) => Some(p.plain_text()),
            Block::Table(t) => Some(t.plain_text()),
            Block::List(l) => Some(l.plain_text()),
            Block::CodeBlock { code, .. } => Some(code.clone()),
            Block::Shape(_) | Block::Spacer { .. } | Block::HorizontalRule | Block::PageBreak => {
                None
            }
        }
    }
}

/// A heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text
    pub text: String,

    /// Level 1-6
    pub level: u8,

    /// Text alignment
    pub alignment: Alignment,

    /// Text color (renderer default when unset)
    pub color: Option<Color>,
}

impl Heading {
    /// Create a left-aligned heading.
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            level: level.clamp(1, 6),
            alignment: Alignment::Left,
            color: None,
        }
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set color and return self.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A list of items, possibly nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Numbered list when true
    pub ordered: bool,

    /// Top-level items
    pub items: Vec<ListItem>,
}

impl List {
    /// Create an empty bulleted list.
    pub fn unordered() -> Self {
        Self {
            ordered: false,
            items: Vec::new(),
        }
    }

    /// Create an empty numbered list.
    pub fn ordered() -> Self {
        Self {
            ordered: true,
            items: Vec::new(),
        }
    }

    /// Add an item and return self.
    pub fn item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }

    /// Add a plain-text item and return self.
    pub fn text_item(self, text: impl Into<String>) -> Self {
        self.item(ListItem::new(Paragraph::with_text(text)))
    }

    /// Total number of items including nested ones.
    pub fn total_items(&self) -> usize {
        fn count_items(items: &[ListItem]) -> usize {
            items
                .iter()
                .map(|item| 1 + count_items(&item.children))
                .sum()
        }
        count_items(&self.items)
    }

    /// Get plain text, one item per line.
    pub fn plain_text(&self) -> String {
        fn collect(items: &[ListItem], out: &mut Vec<String>) {
            for item in items {
                out.push(item.content.plain_text());
                collect(&item.children, out);
            }
        }
        let mut lines = Vec::new();
        collect(&self.items, &mut lines);
        lines.join("\n")
    }
}

/// A single list item with optional nested items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item content
    pub content: Paragraph,

    /// Nested items (same ordering as the parent list)
    pub children: Vec<ListItem>,
}

impl ListItem {
    /// Create an item without children.
    pub fn new(content: Paragraph) -> Self {
        Self {
            content,
            children: Vec::new(),
        }
    }

    /// Add a plain-text child and return self.
    pub fn child(mut self, text: impl Into<String>) -> Self {
        self.children.push(ListItem::new(Paragraph::with_text(text)));
        self
    }
}

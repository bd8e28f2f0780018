//! Markdown rendering for document trees.

use crate::error::Result;
use crate::model::{
    Alignment, Block, Document, Heading, InlineContent, List, ListItem, Paragraph, Table, TextRun,
    TextStyle,
};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter && !doc.metadata.is_empty() {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for block in &doc.blocks {
            self.render_block(&mut output, block);
        }

        let mut output = output.trim().to_string();
        output.push('\n');
        Ok(output)
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading(h) => self.render_heading(output, h),
            Block::Paragraph(p) => {
                if p.is_empty() {
                    return;
                }
                self.render_inline_content(output, &p.content);
                output.push_str("\n\n");
            }
            Block::Table(t) => self.render_table(output, t),
            Block::Shape(d) => {
                // Markdown has no vector shapes; keep a visible placeholder.
                output.push_str(&format!("*{}*\n\n", d.describe()));
            }
            Block::List(list) => {
                self.render_list(output, list);
                output.push('\n');
            }
            Block::CodeBlock { language, code } => {
                output.push_str("```");
                if let Some(lang) = language {
                    output.push_str(lang);
                }
                output.push('\n');
                output.push_str(code.trim_end_matches('\n'));
                output.push_str("\n```\n\n");
            }
            Block::BlockQuote(p) => self.render_quote(output, p),
            Block::HorizontalRule => output.push_str("---\n\n"),
            Block::Spacer { .. } => {}
            Block::PageBreak => {
                if !output.ends_with("\n\n") {
                    output.push_str("\n\n");
                }
            }
        }
    }

    fn render_heading(&self, output: &mut String, heading: &Heading) {
        output.push_str(&"#".repeat(heading.level as usize));
        output.push(' ');
        output.push_str(&self.escape(&heading.text));
        output.push_str("\n\n");
    }

    fn render_list(&self, output: &mut String, list: &List) {
        self.render_items(output, &list.items, list.ordered, 0);
    }

    fn render_items(&self, output: &mut String, items: &[ListItem], ordered: bool, level: usize) {
        for (i, item) in items.iter().enumerate() {
            let marker = if ordered {
                format!("{}.", i + 1)
            } else {
                self.options.list_marker.to_string()
            };
            // Nested items align with the parent's content column.
            let indent = if ordered { "   " } else { "  " };
            output.push_str(&indent.repeat(level));
            output.push_str(&marker);
            output.push(' ');
            self.render_inline_content(output, &item.content.content);
            output.push('\n');
            self.render_items(output, &item.children, ordered, level + 1);
        }
    }

    fn render_quote(&self, output: &mut String, para: &Paragraph) {
        let mut inner = String::new();
        self.render_inline_content(&mut inner, &para.content);
        for line in inner.lines() {
            output.push_str("> ");
            output.push_str(line.trim_end());
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_inline_content(&self, output: &mut String, content: &[InlineContent]) {
        for item in content {
            match item {
                InlineContent::Text(run) => self.render_text_run(output, run),
                InlineContent::LineBreak => output.push('\n'),
                InlineContent::Link { text, url } => {
                    output.push_str(&format!("[{}]({})", self.escape(text), url));
                }
            }
        }
    }

    fn render_text_run(&self, output: &mut String, run: &TextRun) {
        if run.style.code {
            output.push_str(&format!("`{}`", run.text));
            return;
        }
        let text = self.escape(&run.text);
        output.push_str(&apply_text_style(&text, &run.style));
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        let col_count = table.column_count();
        if col_count == 0 {
            return;
        }

        for (i, row) in table.rows.iter().enumerate() {
            output.push('|');
            for cell in &row.cells {
                output.push_str(&format!(" {} |", cell_text(&cell.text)));
            }
            output.push('\n');

            // Separator after the header row, one dash run per header cell width
            if i == 0 {
                output.push('|');
                for cell in &row.cells {
                    let width = cell_text(&cell.text).chars().count() + 2;
                    let alignment = cell.alignment.unwrap_or(table.style.alignment);
                    output.push_str(&separator(alignment, width));
                    output.push('|');
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Cell text as it appears between the pipes.
fn cell_text(text: &str) -> String {
    text.replace('\n', " ").replace('|', "\\|").trim().to_string()
}

/// Dash run for one column, at least three characters wide.
fn separator(alignment: Alignment, width: usize) -> String {
    let width = width.max(3);
    match alignment {
        Alignment::Left | Alignment::Justify => "-".repeat(width),
        Alignment::Center => format!(":{}:", "-".repeat(width - 2)),
        Alignment::Right => format!("{}:", "-".repeat(width - 1)),
    }
}

fn apply_text_style(text: &str, style: &TextStyle) -> String {
    let mut result = text.to_string();

    // Apply styles (innermost first)
    if style.strikethrough {
        result = format!("~~{}~~", result);
    }
    if style.italic {
        result = format!("*{}*", result);
    }
    if style.bold {
        result = format!("**{}**", result);
    }
    if style.highlight {
        result = format!("<mark>{}</mark>", result);
    }

    result
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

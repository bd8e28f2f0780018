//! Single-pass flowing layout of document blocks onto pages.
//!
//! The engine keeps a vertical cursor in PDF user space (origin at the
//! bottom-left corner) and starts a new page whenever the next line, table
//! row, or drawing would cross the bottom margin.

use std::collections::BTreeSet;
use std::mem;

use lopdf::content::{Content, Operation};
use lopdf::Object;

use crate::model::{
    Alignment, Block, Color, Document, Drawing, Heading, InlineContent, ListItem, Paragraph,
    Table, TableRow, TableStyle, TextRun, TextStyle,
};
use crate::render::RenderOptions;

use super::fonts::{encode_win_ansi, StandardFont};

/// Line height as a multiple of the font size.
const LEADING: f32 = 1.2;
const PARAGRAPH_GAP: f32 = 6.0;
const INDENT: f32 = 18.0;
const CELL_PADDING_X: f32 = 6.0;
const CELL_PADDING_Y: f32 = 4.0;
const HEADING_SCALE: [f32; 6] = [1.8, 1.4, 1.2, 1.0, 0.9, 0.8];

const HIGHLIGHT: Color = Color::rgb(0.945, 0.769, 0.059);
const LINK: Color = Color::BLUE;
const QUOTE: Color = Color::gray(0.3);
const CODE_BACKGROUND: Color = Color::gray(0.95);
const RULE: Color = Color::gray(0.5);

/// Pages produced by the layout pass, plus the fonts they reference.
pub struct LaidOut {
    pub pages: Vec<Content>,
    pub fonts: BTreeSet<StandardFont>,
}

/// A word fragment with uniform styling.
#[derive(Debug, Clone, PartialEq)]
struct Piece {
    text: String,
    font: StandardFont,
    color: Option<Color>,
    highlight: bool,
    strike: bool,
    space_before: bool,
}

/// A breakable unit: pieces glued without whitespace, or a hard break.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(Vec<Piece>),
    Break,
}

#[derive(Debug, Default)]
struct Line {
    pieces: Vec<Piece>,
    width: f32,
    spaces: usize,
    /// Last line of a paragraph or ended by a hard break; never justified.
    last: bool,
}

impl Line {
    fn push_group(&mut self, group: &[Piece], lead_space: bool, width: f32) {
        for (i, piece) in group.iter().enumerate() {
            let mut piece = piece.clone();
            piece.space_before = i == 0 && lead_space;
            self.pieces.push(piece);
        }
        self.width += width;
        if lead_space {
            self.spaces += 1;
        }
    }
}

/// Where and how a run of inline content is set.
#[derive(Debug, Clone, Copy)]
struct TextBox {
    x: f32,
    width: f32,
    size: f32,
    alignment: Alignment,
    color: Option<Color>,
    base: TextStyle,
}

#[derive(Default)]
struct Tokenizer {
    tokens: Vec<Token>,
    group: Vec<Piece>,
    pending_space: bool,
}

impl Tokenizer {
    fn push_word(&mut self, word: &mut String, style: &TextStyle, color: Option<Color>) {
        if word.is_empty() {
            return;
        }
        if self.pending_space {
            self.flush_group();
        }
        self.group.push(Piece {
            text: mem::take(word),
            font: StandardFont::for_style(style.bold, style.italic, style.code),
            color,
            highlight: style.highlight,
            strike: style.strikethrough,
            space_before: self.pending_space,
        });
        self.pending_space = false;
    }

    fn hard_break(&mut self) {
        self.flush_group();
        self.tokens.push(Token::Break);
        self.pending_space = false;
    }

    fn flush_group(&mut self) {
        if !self.group.is_empty() {
            self.tokens.push(Token::Word(mem::take(&mut self.group)));
        }
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush_group();
        self.tokens
    }
}

fn merge_style(base: &TextStyle, run: &TextStyle) -> TextStyle {
    TextStyle {
        bold: base.bold || run.bold,
        italic: base.italic || run.italic,
        strikethrough: base.strikethrough || run.strikethrough,
        code: base.code || run.code,
        highlight: base.highlight || run.highlight,
    }
}

fn tokenize(content: &[InlineContent], base: &TextStyle, color: Option<Color>) -> Vec<Token> {
    let mut tokenizer = Tokenizer::default();

    for item in content {
        let (text, style, color) = match item {
            InlineContent::Text(run) => (run.text.as_str(), merge_style(base, &run.style), color),
            InlineContent::Link { text, .. } => (text.as_str(), *base, Some(LINK)),
            InlineContent::LineBreak => {
                tokenizer.hard_break();
                continue;
            }
        };

        let mut word = String::new();
        for ch in text.chars() {
            if ch == '\n' {
                tokenizer.push_word(&mut word, &style, color);
                tokenizer.hard_break();
            } else if ch.is_whitespace() {
                tokenizer.push_word(&mut word, &style, color);
                tokenizer.pending_space = true;
            } else {
                word.push(ch);
            }
        }
        tokenizer.push_word(&mut word, &style, color);
    }

    tokenizer.finish()
}

/// Greedy line filling. A word wider than `max_width` gets a line of its own.
fn wrap(tokens: &[Token], max_width: f32, size: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = Line::default();

    for token in tokens {
        match token {
            Token::Break => {
                line.last = true;
                lines.push(mem::take(&mut line));
            }
            Token::Word(group) => {
                let group_width: f32 = group.iter().map(|p| p.font.measure(&p.text, size)).sum();
                let lead = !line.pieces.is_empty() && group[0].space_before;
                let space = if lead {
                    group[0].font.measure(" ", size)
                } else {
                    0.0
                };

                if !line.pieces.is_empty() && line.width + space + group_width > max_width {
                    lines.push(mem::take(&mut line));
                    line.push_group(group, false, group_width);
                } else {
                    line.push_group(group, lead, space + group_width);
                }
            }
        }
    }

    if !line.pieces.is_empty() {
        line.last = true;
        lines.push(line);
    }
    lines
}

fn pt(value: f32) -> Object {
    Object::from((value * 100.0).round() / 100.0)
}

fn color_operands(color: Color) -> Vec<Object> {
    vec![pt(color.r), pt(color.g), pt(color.b)]
}

fn font_operands(font: StandardFont, size: f32) -> Vec<Object> {
    vec![
        Object::Name(font.resource_name().as_bytes().to_vec()),
        pt(size),
    ]
}

/// Lays out document blocks and records content-stream operations per page.
pub struct LayoutEngine<'a> {
    options: &'a RenderOptions,
    page_width: f32,
    page_height: f32,
    pages: Vec<Content>,
    ops: Vec<Operation>,
    cursor: f32,
    fonts: BTreeSet<StandardFont>,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        let (page_width, page_height) = options.page_size.dimensions();
        Self {
            options,
            page_width,
            page_height,
            pages: Vec::new(),
            ops: Vec::new(),
            cursor: page_height - options.margin,
            fonts: BTreeSet::new(),
        }
    }

    /// Lay out every block of `doc`. Always yields at least one page.
    pub fn layout(mut self, doc: &Document) -> LaidOut {
        for block in &doc.blocks {
            self.block(block);
        }
        if !self.ops.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        LaidOut {
            pages: self.pages,
            fonts: self.fonts,
        }
    }

    fn top(&self) -> f32 {
        self.page_height - self.options.margin
    }

    fn bottom(&self) -> f32 {
        self.options.margin
    }

    fn left(&self) -> f32 {
        self.options.margin
    }

    fn frame_width(&self) -> f32 {
        (self.page_width - 2.0 * self.options.margin).max(INDENT * 2.0)
    }

    fn at_page_top(&self) -> bool {
        self.cursor >= self.top()
    }

    fn new_page(&mut self) {
        let operations = mem::take(&mut self.ops);
        self.pages.push(Content { operations });
        self.cursor = self.top();
    }

    fn fits_frame(&self, height: f32) -> bool {
        height <= self.top() - self.bottom()
    }

    /// Start a new page unless `height` fits below the cursor.
    /// Blocks taller than the frame start at the top and overflow the bottom margin.
    fn ensure_space(&mut self, height: f32) {
        if !self.fits_frame(height) {
            log::warn!(
                "Block of {:.1}pt exceeds the {:.1}pt page frame; it will overflow the bottom margin",
                height,
                self.top() - self.bottom()
            );
        }
        if self.cursor - height < self.bottom() && !self.at_page_top() {
            self.new_page();
        }
    }

    /// Vertical gap between blocks, dropped at the top of a page.
    fn gap(&mut self, height: f32) {
        if self.at_page_top() {
            return;
        }
        self.cursor -= height;
        if self.cursor < self.bottom() {
            self.new_page();
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading(h) => self.heading(h),
            Block::Paragraph(p) => {
                let text_box = self.body_box(p.style.alignment, p.style.color);
                self.paragraph(&p.content, text_box);
                self.gap(PARAGRAPH_GAP);
            }
            Block::Table(t) => {
                self.table(t);
                self.gap(PARAGRAPH_GAP);
            }
            Block::Shape(d) => self.drawing(d),
            Block::Spacer { height } => self.spacer(*height),
            Block::List(list) => {
                self.list_items(&list.items, list.ordered, 0);
                self.gap(PARAGRAPH_GAP);
            }
            Block::CodeBlock { code, .. } => self.code_block(code),
            Block::BlockQuote(p) => self.quote(p),
            Block::HorizontalRule => self.rule(),
            Block::PageBreak => {
                if !self.ops.is_empty() {
                    self.new_page();
                }
            }
        }
    }

    fn body_box(&self, alignment: Alignment, color: Option<Color>) -> TextBox {
        TextBox {
            x: self.left(),
            width: self.frame_width(),
            size: self.options.base_font_size,
            alignment,
            color,
            base: TextStyle::default(),
        }
    }

    fn heading(&mut self, heading: &Heading) {
        let scale = HEADING_SCALE[(heading.level.clamp(1, 6) - 1) as usize];
        let size = self.options.base_font_size * scale;
        let text_box = TextBox {
            size,
            base: TextStyle {
                bold: true,
                ..Default::default()
            },
            ..self.body_box(heading.alignment, heading.color)
        };

        self.gap(size * 0.5);
        let content = [InlineContent::Text(TextRun::new(heading.text.clone()))];
        self.paragraph(&content, text_box);
        self.gap(size * 0.5);
    }

    fn paragraph(&mut self, content: &[InlineContent], text_box: TextBox) {
        let tokens = tokenize(content, &text_box.base, text_box.color);
        let lines = wrap(&tokens, text_box.width, text_box.size);
        let leading = text_box.size * LEADING;

        for line in &lines {
            self.ensure_space(leading);
            let baseline = self.cursor - text_box.size;
            self.cursor -= leading;
            if !line.pieces.is_empty() {
                self.draw_line(line, &text_box, baseline);
            }
        }
    }

    fn draw_line(&mut self, line: &Line, text_box: &TextBox, baseline: f32) {
        let size = text_box.size;
        let slack = (text_box.width - line.width).max(0.0);
        let (x, word_spacing) = match text_box.alignment {
            Alignment::Left => (text_box.x, 0.0),
            Alignment::Center => (text_box.x + slack / 2.0, 0.0),
            Alignment::Right => (text_box.x + slack, 0.0),
            Alignment::Justify if !line.last && line.spaces > 0 => {
                (text_box.x, slack / line.spaces as f32)
            }
            Alignment::Justify => (text_box.x, 0.0),
        };

        // Horizontal extent of each piece, excluding its leading space.
        let mut spans = Vec::with_capacity(line.pieces.len());
        let mut pen = x;
        for piece in &line.pieces {
            if piece.space_before {
                pen += piece.font.measure(" ", size) + word_spacing;
            }
            let width = piece.font.measure(&piece.text, size);
            spans.push((pen, width));
            pen += width;
        }

        for (piece, &(start, width)) in line.pieces.iter().zip(&spans) {
            if piece.highlight {
                self.fill_rect(start, baseline - size * 0.25, width, size * 1.15, HIGHLIGHT);
            }
        }

        self.push("BT", vec![]);
        if word_spacing != 0.0 {
            self.push("Tw", vec![pt(word_spacing)]);
        }
        let mut font = None;
        let mut color = None;
        for (i, piece) in line.pieces.iter().enumerate() {
            if font != Some(piece.font) {
                self.push("Tf", font_operands(piece.font, size));
                self.fonts.insert(piece.font);
                font = Some(piece.font);
            }
            if i == 0 {
                self.push("Td", vec![pt(x), pt(baseline)]);
            }
            let fill = piece.color.unwrap_or(Color::BLACK);
            if color != Some(fill) {
                self.push("rg", color_operands(fill));
                color = Some(fill);
            }
            let text = if piece.space_before {
                format!(" {}", piece.text)
            } else {
                piece.text.clone()
            };
            self.push("Tj", vec![Object::string_literal(encode_win_ansi(&text))]);
        }
        if word_spacing != 0.0 {
            self.push("Tw", vec![pt(0.0)]);
        }
        self.push("ET", vec![]);

        for (piece, &(start, width)) in line.pieces.iter().zip(&spans) {
            if piece.strike {
                let y = baseline + size * 0.3;
                let stroke = piece.color.unwrap_or(Color::BLACK);
                self.line(start, y, start + width, y, stroke, size / 18.0);
            }
        }
    }

    fn draw_text(&mut self, x: f32, baseline: f32, font: StandardFont, size: f32, text: &str) {
        self.fonts.insert(font);
        self.push("BT", vec![]);
        self.push("Tf", font_operands(font, size));
        self.push("Td", vec![pt(x), pt(baseline)]);
        self.push("rg", color_operands(Color::BLACK));
        self.push("Tj", vec![Object::string_literal(encode_win_ansi(text))]);
        self.push("ET", vec![]);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.push("q", vec![]);
        self.push("rg", color_operands(color));
        self.push("re", vec![pt(x), pt(y), pt(width), pt(height)]);
        self.push("f", vec![]);
        self.push("Q", vec![]);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.push("q", vec![]);
        self.push("RG", color_operands(color));
        self.push("w", vec![pt(1.0)]);
        self.push("re", vec![pt(x), pt(y), pt(width), pt(height)]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        self.push("q", vec![]);
        self.push("RG", color_operands(color));
        self.push("w", vec![pt(width)]);
        self.push("m", vec![pt(x1), pt(y1)]);
        self.push("l", vec![pt(x2), pt(y2)]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }

    fn spacer(&mut self, height: f32) {
        if self.cursor - height < self.bottom() {
            if !self.at_page_top() {
                self.new_page();
            }
        } else {
            self.cursor -= height;
        }
    }

    fn drawing(&mut self, drawing: &Drawing) {
        self.ensure_space(drawing.height);
        let origin_x = self.left();
        let origin_y = self.cursor - drawing.height;

        self.push("q", vec![]);
        for rect in &drawing.rects {
            let (x, y) = (origin_x + rect.x, origin_y + rect.y);
            let paint = match (rect.fill, rect.stroke) {
                (Some(_), Some(_)) => "B",
                (Some(_), None) => "f",
                (None, Some(_)) => "S",
                (None, None) => continue,
            };
            if let Some(fill) = rect.fill {
                self.push("rg", color_operands(fill));
            }
            if let Some(stroke) = rect.stroke {
                self.push("RG", color_operands(stroke));
                self.push("w", vec![pt(rect.stroke_width)]);
            }
            self.push("re", vec![pt(x), pt(y), pt(rect.width), pt(rect.height)]);
            self.push(paint, vec![]);
        }
        self.push("Q", vec![]);

        self.cursor = origin_y;
    }

    fn table(&mut self, table: &Table) {
        let columns = table.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
        if columns == 0 {
            return;
        }

        let mut widths = vec![0.0f32; columns];
        for row in &table.rows {
            let (style, size, _) = row_style(row, &table.style);
            let font = StandardFont::for_style(style.bold, style.italic, style.code);
            for (i, cell) in row.cells.iter().enumerate() {
                let text_width = cell
                    .text
                    .lines()
                    .map(|l| font.measure(l, size))
                    .fold(0.0, f32::max);
                widths[i] = widths[i].max(text_width + 2.0 * CELL_PADDING_X);
            }
        }

        let frame = self.frame_width();
        let total: f32 = widths.iter().sum();
        if total > frame {
            let scale = frame / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }
        let total: f32 = widths.iter().sum();
        let x0 = self.left() + (frame - total) / 2.0;

        for row in &table.rows {
            self.table_row(row, &widths, x0, &table.style);
        }
    }

    fn table_row(&mut self, row: &TableRow, widths: &[f32], x0: f32, style: &TableStyle) {
        let (text_style, size, text_color) = row_style(row, style);
        let leading = size * LEADING;

        let cell_lines: Vec<Vec<Line>> = row
            .cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let content = [InlineContent::Text(TextRun::new(cell.text.clone()))];
                let tokens = tokenize(&content, &text_style, Some(text_color));
                wrap(&tokens, (width - 2.0 * CELL_PADDING_X).max(1.0), size)
            })
            .collect();
        let line_count = cell_lines.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let height = line_count as f32 * leading + 2.0 * CELL_PADDING_Y;

        self.ensure_space(height);
        let top = self.cursor;
        let bottom = top - height;
        let row_width: f32 = widths.iter().take(row.cells.len()).sum();

        let background = if row.is_header {
            style.header_background
        } else {
            style.body_background
        };
        if let Some(fill) = background {
            self.fill_rect(x0, bottom, row_width, height, fill);
        }

        let mut cell_x = x0;
        for ((cell, lines), width) in row.cells.iter().zip(&cell_lines).zip(widths) {
            let text_box = TextBox {
                x: cell_x + CELL_PADDING_X,
                width: (width - 2.0 * CELL_PADDING_X).max(1.0),
                size,
                alignment: cell.alignment.unwrap_or(style.alignment),
                color: Some(text_color),
                base: text_style,
            };
            let mut baseline = top - CELL_PADDING_Y - size;
            for line in lines {
                if !line.pieces.is_empty() {
                    self.draw_line(line, &text_box, baseline);
                }
                baseline -= leading;
            }
            cell_x += width;
        }

        if let Some(grid) = style.grid {
            let mut cell_x = x0;
            for width in widths.iter().take(row.cells.len()) {
                self.stroke_rect(cell_x, bottom, *width, height, grid);
                cell_x += width;
            }
        }

        self.cursor = bottom;
    }

    fn list_items(&mut self, items: &[ListItem], ordered: bool, depth: usize) {
        let size = self.options.base_font_size;
        let leading = size * LEADING;
        let marker_x = self.left() + INDENT * depth as f32;
        let text_x = marker_x + INDENT;

        for (i, item) in items.iter().enumerate() {
            let marker = if ordered {
                format!("{}.", i + 1)
            } else {
                "\u{2022}".to_string()
            };

            self.ensure_space(leading);
            let baseline = self.cursor - size;
            self.draw_text(marker_x, baseline, StandardFont::Helvetica, size, &marker);

            if item.content.is_empty() {
                self.cursor -= leading;
            } else {
                let text_box = TextBox {
                    x: text_x,
                    width: (self.left() + self.frame_width() - text_x).max(INDENT),
                    ..self.body_box(item.content.style.alignment, item.content.style.color)
                };
                self.paragraph(&item.content.content, text_box);
            }
            self.list_items(&item.children, ordered, depth + 1);
        }
    }

    fn code_block(&mut self, code: &str) {
        let size = self.options.base_font_size * 0.9;
        let leading = size * LEADING;
        let left = self.left();
        let width = self.frame_width();

        for line in code.trim_end_matches('\n').lines() {
            self.ensure_space(leading);
            let top = self.cursor;
            self.fill_rect(left, top - leading, width, leading, CODE_BACKGROUND);
            let text = line.replace('\t', "    ");
            if !text.is_empty() {
                self.draw_text(left + 4.0, top - size, StandardFont::Courier, size, &text);
            }
            self.cursor -= leading;
        }
        self.gap(PARAGRAPH_GAP);
    }

    fn quote(&mut self, para: &Paragraph) {
        let text_box = TextBox {
            x: self.left() + INDENT,
            width: self.frame_width() - INDENT,
            base: TextStyle {
                italic: true,
                ..Default::default()
            },
            ..self.body_box(para.style.alignment, Some(para.style.color.unwrap_or(QUOTE)))
        };

        let start = self.cursor;
        let pages_before = self.pages.len();
        self.paragraph(&para.content, text_box);
        if self.pages.len() == pages_before && self.cursor < start {
            let x = self.left() + INDENT / 3.0;
            self.line(x, start, x, self.cursor, RULE, 2.0);
        }
        self.gap(PARAGRAPH_GAP);
    }

    fn rule(&mut self) {
        let height = 12.0;
        self.ensure_space(height);
        let y = self.cursor - height / 2.0;
        let left = self.left();
        let right = left + self.frame_width();
        self.line(left, y, right, y, RULE, 0.5);
        self.cursor -= height;
    }
}

fn row_style(row: &TableRow, style: &TableStyle) -> (TextStyle, f32, Color) {
    if row.is_header {
        let bold = TextStyle {
            bold: true,
            ..Default::default()
        };
        (bold, style.header_font_size, style.header_text)
    } else {
        (TextStyle::default(), style.body_font_size, Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;

    fn words(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| match t {
                Token::Word(group) => group.iter().map(|p| p.text.as_str()).collect(),
                Token::Break => "\\n".to_string(),
            })
            .collect()
    }

    fn operators(content: &Content) -> Vec<&str> {
        content
            .operations
            .iter()
            .map(|op| op.operator.as_str())
            .collect()
    }

    #[test]
    fn test_tokenize_glues_runs() {
        let para = Paragraph::new()
            .text("Hello ")
            .run(TextRun::bold("wor"))
            .text("ld!\nNext");
        let tokens = tokenize(&para.content, &TextStyle::default(), None);

        assert_eq!(words(&tokens), vec!["Hello", "world!", "\\n", "Next"]);
        if let Token::Word(group) = &tokens[1] {
            assert_eq!(group.len(), 2);
            assert_eq!(group[0].font, StandardFont::HelveticaBold);
            assert_eq!(group[1].font, StandardFont::Helvetica);
            assert!(group[0].space_before);
            assert!(!group[1].space_before);
        }
    }

    #[test]
    fn test_wrap_breaks_lines() {
        let para = Paragraph::with_text("aaa bbb ccc");
        let tokens = tokenize(&para.content, &TextStyle::default(), None);
        // "aaa bbb" at 10pt is 3*5.56 + 2.78 + 3*5.56 = 36.14
        let lines = wrap(&tokens, 40.0, 10.0);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spaces, 1);
        assert!(!lines[0].last);
        assert!(lines[1].last);
        assert_eq!(lines[1].pieces[0].text, "ccc");
        assert!(!lines[1].pieces[0].space_before);
    }

    #[test]
    fn test_wrap_hard_breaks() {
        let para = Paragraph::with_lines(["one", "", "three"]);
        let tokens = tokenize(&para.content, &TextStyle::default(), None);
        let lines = wrap(&tokens, 500.0, 10.0);

        assert_eq!(lines.len(), 3);
        assert!(lines[1].pieces.is_empty());
        assert!(lines.iter().all(|l| l.last));
    }

    #[test]
    fn test_empty_document_has_one_page() {
        let options = RenderOptions::default();
        let laid_out = LayoutEngine::new(&options).layout(&Document::new());
        assert_eq!(laid_out.pages.len(), 1);
        assert!(laid_out.fonts.is_empty());
    }

    #[test]
    fn test_paragraphs_flow_onto_new_pages() {
        let mut doc = Document::new();
        for i in 0..200 {
            doc.add_paragraph(Paragraph::with_text(format!("Paragraph {}", i)));
        }
        let options = RenderOptions::default();
        let laid_out = LayoutEngine::new(&options).layout(&doc);

        // 648pt of frame, 18pt per paragraph
        assert!(laid_out.pages.len() >= 5);
        assert!(laid_out.fonts.contains(&StandardFont::Helvetica));
    }

    #[test]
    fn test_page_break_block() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("first"));
        doc.add_block(Block::PageBreak);
        doc.add_block(Block::PageBreak);
        doc.add_paragraph(Paragraph::with_text("second"));
        let options = RenderOptions::default();
        let laid_out = LayoutEngine::new(&options).layout(&doc);

        assert_eq!(laid_out.pages.len(), 2);
    }

    #[test]
    fn test_justified_line_sets_word_spacing() {
        let text = "word ".repeat(60);
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text(text).align(Alignment::Justify));
        let options = RenderOptions::default();
        let laid_out = LayoutEngine::new(&options).layout(&doc);

        assert!(operators(&laid_out.pages[0]).contains(&"Tw"));
    }

    #[test]
    fn test_drawing_paints_rects() {
        let mut doc = Document::new();
        doc.add_drawing(
            Drawing::new(400.0, 200.0)
                .with_rect(
                    Rect::new(50.0, 50.0, 300.0, 100.0)
                        .fill(Color::RED)
                        .stroke(Color::BLACK, 2.0),
                )
                .with_rect(Rect::new(100.0, 75.0, 200.0, 50.0).fill(Color::BLUE)),
        );
        let options = RenderOptions::default();
        let laid_out = LayoutEngine::new(&options).layout(&doc);
        let ops = operators(&laid_out.pages[0]);

        assert_eq!(ops.iter().filter(|op| **op == "re").count(), 2);
        assert!(ops.contains(&"B"));
        assert!(ops.contains(&"f"));
    }

    #[test]
    fn test_oversized_drawing_starts_fresh_page() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("before"));
        doc.add_drawing(
            Drawing::new(400.0, 2000.0)
                .with_rect(Rect::new(0.0, 0.0, 400.0, 2000.0).fill(Color::RED)),
        );
        let options = RenderOptions::default();

        let engine = LayoutEngine::new(&options);
        assert!(engine.fits_frame(648.0));
        assert!(!engine.fits_frame(2000.0));

        let laid_out = engine.layout(&doc);
        assert_eq!(laid_out.pages.len(), 2);
        assert!(!operators(&laid_out.pages[0]).contains(&"re"));
        assert!(operators(&laid_out.pages[1]).contains(&"re"));
    }

    #[test]
    fn test_table_uses_bold_header() {
        let mut doc = Document::new();
        doc.add_table(Table::from_rows(["ID", "Name"], [["1", "Item A"]]));
        let options = RenderOptions::default();
        let laid_out = LayoutEngine::new(&options).layout(&doc);

        assert!(laid_out.fonts.contains(&StandardFont::HelveticaBold));
        assert!(laid_out.fonts.contains(&StandardFont::Helvetica));
        let ops = operators(&laid_out.pages[0]);
        // Default style draws a grid cell per column per row.
        assert_eq!(ops.iter().filter(|op| **op == "S").count(), 4);
    }
}

//! HTML rendering for document trees.

use crate::error::Result;
use crate::model::{
    Block, Color, Document, Drawing, Heading, InlineContent, ListItem, Paragraph, Table, TextRun,
};

use super::RenderOptions;

const STYLESHEET: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; }
h1 { color: #2c3e50; border-bottom: 2px solid #3498db; }
h2 { color: #34495e; margin-top: 30px; }
p { line-height: 1.6; color: #333; }
table { border-collapse: collapse; width: 100%; margin: 20px 0; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #3498db; color: white; }
.highlight { background-color: #f1c40f; padding: 2px 4px; }
";

/// Convert a document to a standalone HTML5 page.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    let title = doc.metadata.title.as_deref().unwrap_or("Untitled");
    out.push_str(&format!("    <title>{}</title>\n", escape_html(title)));
    if let Some(author) = &doc.metadata.author {
        out.push_str(&format!(
            "    <meta name=\"author\" content=\"{}\">\n",
            escape_html(author)
        ));
    }
    if options.html_stylesheet {
        out.push_str("    <style>\n");
        for line in STYLESHEET.lines() {
            out.push_str("        ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("    </style>\n");
    }
    out.push_str("</head>\n<body>\n");

    for block in &doc.blocks {
        render_block(&mut out, block);
    }

    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading(h) => render_heading(out, h),
        Block::Paragraph(p) => {
            out.push_str(&format!("    <p{}>", paragraph_style(p)));
            render_inline(out, &p.content);
            out.push_str("</p>\n");
        }
        Block::Table(t) => render_table(out, t),
        Block::Shape(d) => render_drawing(out, d),
        Block::Spacer { height } => {
            out.push_str(&format!("    <div style=\"height: {}pt\"></div>\n", height));
        }
        Block::List(list) => render_list(out, &list.items, list.ordered, 1),
        Block::CodeBlock { language, code } => {
            match language {
                Some(lang) => out.push_str(&format!(
                    "    <pre><code class=\"language-{}\">",
                    escape_html(lang)
                )),
                None => out.push_str("    <pre><code>"),
            }
            out.push_str(&escape_html(code.trim_end_matches('\n')));
            out.push_str("</code></pre>\n");
        }
        Block::BlockQuote(p) => {
            out.push_str("    <blockquote>");
            render_inline(out, &p.content);
            out.push_str("</blockquote>\n");
        }
        Block::HorizontalRule => out.push_str("    <hr>\n"),
        Block::PageBreak => {
            out.push_str("    <div style=\"page-break-after: always\"></div>\n");
        }
    }
}

fn render_heading(out: &mut String, heading: &Heading) {
    let mut styles = Vec::new();
    if let Some(color) = heading.color {
        styles.push(format!("color: {}", color.to_hex()));
    }
    if heading.alignment != Default::default() {
        styles.push(format!("text-align: {}", heading.alignment.as_css()));
    }
    let attr = style_attr(&styles);
    out.push_str(&format!(
        "    <h{level}{attr}>{}</h{level}>\n",
        escape_html(&heading.text),
        level = heading.level,
    ));
}

fn paragraph_style(para: &Paragraph) -> String {
    let mut styles = Vec::new();
    if let Some(color) = para.style.color {
        styles.push(format!("color: {}", color.to_hex()));
    }
    if para.style.alignment != Default::default() {
        styles.push(format!("text-align: {}", para.style.alignment.as_css()));
    }
    style_attr(&styles)
}

fn style_attr(styles: &[String]) -> String {
    if styles.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", styles.join("; "))
    }
}

fn render_inline(out: &mut String, content: &[InlineContent]) {
    for item in content {
        match item {
            InlineContent::Text(run) => out.push_str(&styled_run(run)),
            InlineContent::LineBreak => out.push_str("<br>\n"),
            InlineContent::Link { text, url } => out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(url),
                escape_html(text)
            )),
        }
    }
}

fn styled_run(run: &TextRun) -> String {
    let mut html = escape_html(&run.text);
    if run.style.code {
        html = format!("<code>{}</code>", html);
    }
    if run.style.strikethrough {
        html = format!("<del>{}</del>", html);
    }
    if run.style.italic {
        html = format!("<em>{}</em>", html);
    }
    if run.style.bold {
        html = format!("<strong>{}</strong>", html);
    }
    if run.style.highlight {
        html = format!("<span class=\"highlight\">{}</span>", html);
    }
    html
}

fn render_table(out: &mut String, table: &Table) {
    if table.is_empty() {
        return;
    }
    out.push_str("    <table>\n");
    for row in &table.rows {
        out.push_str("        <tr>\n");
        let tag = if row.is_header { "th" } else { "td" };
        for cell in &row.cells {
            let align = cell.alignment.unwrap_or(table.style.alignment);
            let attr = if align == Default::default() {
                String::new()
            } else {
                format!(" style=\"text-align: {}\"", align.as_css())
            };
            out.push_str(&format!(
                "            <{tag}{attr}>{}</{tag}>\n",
                escape_html(&cell.text)
            ));
        }
        out.push_str("        </tr>\n");
    }
    out.push_str("    </table>\n");
}

fn render_list(out: &mut String, items: &[ListItem], ordered: bool, depth: usize) {
    let tag = if ordered { "ol" } else { "ul" };
    let indent = "    ".repeat(depth);
    out.push_str(&format!("{indent}<{tag}>\n"));
    for item in items {
        out.push_str(&format!("{indent}    <li>"));
        render_inline(out, &item.content.content);
        if !item.children.is_empty() {
            out.push('\n');
            render_list(out, &item.children, ordered, depth + 2);
            out.push_str(&format!("{indent}    "));
        }
        out.push_str("</li>\n");
    }
    out.push_str(&format!("{indent}</{tag}>\n"));
}

fn render_drawing(out: &mut String, drawing: &Drawing) {
    out.push_str(&format!(
        "    <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = drawing.width,
        h = drawing.height,
    ));
    for rect in &drawing.rects {
        // SVG's origin is top-left; drawing coordinates are bottom-left.
        let y = drawing.height - rect.y - rect.height;
        out.push_str(&format!(
            "        <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
            rect.x,
            y,
            rect.width,
            rect.height,
            paint(rect.fill)
        ));
        if let Some(stroke) = rect.stroke {
            out.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                stroke.to_hex(),
                rect.stroke_width
            ));
        }
        out.push_str("/>\n");
    }
    out.push_str("    </svg>\n");
}

fn paint(color: Option<Color>) -> String {
    color
        .map(|c| c.to_hex())
        .unwrap_or_else(|| "none".to_string())
}

/// Escape HTML special characters.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

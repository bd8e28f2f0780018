//! Rendering options and configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Options for rendering document trees.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Page size for paged output (PDF)
    pub page_size: PageSize,

    /// Page margin in points on all sides
    pub margin: f32,

    /// Body font size in points
    pub base_font_size: f32,

    /// Compress PDF content streams
    pub compress: bool,

    /// Include YAML frontmatter with metadata (Markdown)
    pub include_frontmatter: bool,

    /// Character to use for unordered list markers (Markdown, text)
    pub list_marker: char,

    /// Escape special Markdown characters in text runs
    pub escape_special_chars: bool,

    /// Width of heading underlines in plain text output
    pub rule_width: usize,

    /// Embed a default stylesheet in HTML output
    pub html_stylesheet: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page margin in points.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Set the body font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.base_font_size = size.clamp(4.0, 72.0);
        self
    }

    /// Enable or disable PDF stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set the width of plain text heading underlines.
    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    /// Enable or disable the embedded HTML stylesheet.
    pub fn with_html_stylesheet(mut self, embed: bool) -> Self {
        self.html_stylesheet = embed;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margin: 72.0,
            base_font_size: 10.0,
            compress: false,
            include_frontmatter: false,
            list_marker: '-',
            escape_special_chars: true,
            rule_width: 40,
            html_stylesheet: true,
        }
    }
}

/// Page size for paged output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US Letter (8.5 x 11 inches)
    #[default]
    Letter,
    /// ISO A4 (210 x 297 mm)
    A4,
    /// Custom width and height in points
    Custom {
        /// Width in points
        width: f32,
        /// Height in points
        height: f32,
    },
}

impl PageSize {
    /// Get page dimensions as (width, height) in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0), // 8.5 * 72, 11 * 72
            PageSize::A4 => (595.0, 842.0),     // 210mm * 2.834, 297mm * 2.834
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    /// Parse `letter`, `a4`, or `WIDTHxHEIGHT` in points.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            _ => {
                let (w, h) = s
                    .split_once('x')
                    .ok_or_else(|| format!("Invalid page size: {}", s))?;
                let width: f32 = w.trim().parse().map_err(|_| "Invalid page width")?;
                let height: f32 = h.trim().parse().map_err(|_| "Invalid page height")?;
                if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
                    return Err("Page dimensions must be positive and finite".to_string());
                }
                Ok(PageSize::Custom { width, height })
            }
        }
    }
}

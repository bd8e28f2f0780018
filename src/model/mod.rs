//! Document tree types.
//!
//! This module defines the format-agnostic intermediate representation that
//! fixture builders produce and renderers consume. A [`Document`] is an
//! ordered sequence of [`Block`]s plus [`Metadata`].

mod block;
mod document;
mod paragraph;
mod shape;
mod table;

pub use block::{Block, Heading, List, ListItem};
pub use document::{Document, Metadata};
pub use paragraph::{Alignment, InlineContent, Paragraph, ParagraphStyle, TextRun, TextStyle};
pub use shape::{Color, Drawing, Rect};
pub use table::{Table, TableCell, TableRow, TableStyle};

//! PDF rendering for document trees.
//!
//! Pages are laid out with the standard Type1 fonts (Helvetica family and
//! Courier), so no font program is embedded. The object graph is assembled
//! with `lopdf` and serialized in one pass.

mod fonts;
mod layout;

pub use fonts::{encode_win_ansi, StandardFont};

use lopdf::{dictionary, Dictionary, Object, Stream};

use crate::error::Result;
use crate::model::{Document, Metadata};

use super::RenderOptions;
use layout::LayoutEngine;

/// PDF version written to the header.
const PDF_VERSION: &str = "1.4";

/// Convert a document to PDF bytes.
pub fn to_pdf(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let (page_width, page_height) = options.page_size.dimensions();
    let laid_out = LayoutEngine::new(options).layout(doc);

    let mut pdf = lopdf::Document::with_version(PDF_VERSION);
    let pages_id = pdf.new_object_id();

    let mut font_dict = Dictionary::new();
    for font in &laid_out.fonts {
        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        font_dict.set(font.resource_name(), font_id);
    }
    let resources_id = pdf.add_object(dictionary! {
        "Font" => font_dict,
    });

    let mut kids = Vec::with_capacity(laid_out.pages.len());
    for content in &laid_out.pages {
        let stream = Stream::new(Dictionary::new(), content.encode()?);
        let content_id = pdf.add_object(stream);
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::from(page_id));
    }

    let page_count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);

    if let Some(info) = info_dictionary(&doc.metadata) {
        let info_id = pdf.add_object(info);
        pdf.trailer.set("Info", info_id);
    }

    if options.compress {
        pdf.compress();
    }

    let mut buffer = Vec::new();
    pdf.save_to(&mut buffer)?;

    log::debug!(
        "Rendered PDF: {} pages, {} fonts, {} bytes",
        page_count,
        laid_out.fonts.len(),
        buffer.len()
    );
    Ok(buffer)
}

/// Build the document information dictionary, or `None` when metadata is empty.
fn info_dictionary(metadata: &Metadata) -> Option<Dictionary> {
    if metadata.is_empty() {
        return None;
    }

    let mut info = Dictionary::new();
    let fields = [
        ("Title", &metadata.title),
        ("Author", &metadata.author),
        ("Subject", &metadata.subject),
        ("Keywords", &metadata.keywords),
        ("Creator", &metadata.creator),
        ("Producer", &metadata.producer),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            info.set(key, Object::string_literal(encode_win_ansi(value)));
        }
    }
    if let Some(created) = metadata.created {
        let date = created.format("D:%Y%m%d%H%M%S+00'00'").to_string();
        info.set("CreationDate", Object::string_literal(date.clone()));
        info.set("ModDate", Object::string_literal(date));
    }
    Some(info)
}

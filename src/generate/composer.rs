//! Document composition: resolved field values to PDF bytes.
//!
//! The composer receives a fully resolved, immutable document description
//! and assembles the PDF in-process with `lopdf`. Output is deterministic:
//! identical input produces byte-identical documents (no timestamps, no
//! document ID), which the idempotence tests rely on.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use thiserror::Error;

use crate::generate::fonts::{encode_win_ansi, text_width, FontKind};
use crate::template::models::Alignment;

/// Errors raised while assembling the PDF byte stream.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("failed to encode page content stream: {0}")]
    Encode(#[source] lopdf::Error),
    #[error("failed to serialize PDF document: {0}")]
    Save(#[source] lopdf::Error),
}

/// One resolved field: label, display value and alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedLine {
    pub label: String,
    pub value: String,
    pub alignment: Alignment,
}

/// An ordered group of resolved fields under a section title.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedSection {
    pub title: String,
    pub lines: Vec<ComposedLine>,
}

/// The fully resolved document description handed to `render`.
///
/// Section order and within-section line order are preserved exactly as
/// given; the composer performs no reordering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposedDocument {
    pub sections: Vec<ComposedSection>,
}

// US Letter geometry and spacing, matching the layout the service's
// clients were built against.
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN_X: f32 = 72.0;
const MARGIN_TOP: f32 = 50.0;
const MARGIN_BOTTOM: f32 = 50.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;

const HEADING_SIZE: f32 = 16.0;
const HEADING_ADVANCE: f32 = 18.0;
const HEADING_SPACE_AFTER: f32 = 12.0;
const BODY_SIZE: f32 = 11.0;
const BODY_LEADING: f32 = 14.0;
const LINE_SPACE_AFTER: f32 = 6.0;
const SECTION_SPACE_AFTER: f32 = 24.0;

/// A laid-out baseline with styled text runs.
struct PlacedLine {
    x: f32,
    y: f32,
    size: f32,
    segments: Vec<(FontKind, String)>,
}

/// Render a composed document to PDF bytes.
pub fn render(document: &ComposedDocument) -> Result<Vec<u8>, ComposeError> {
    let pages = layout(document);
    emit(&pages)
}

/// Flow the document into pages of positioned text runs.
fn layout(document: &ComposedDocument) -> Vec<Vec<PlacedLine>> {
    let mut pages: Vec<Vec<PlacedLine>> = Vec::new();
    let mut current: Vec<PlacedLine> = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN_TOP;

    let mut break_page = |current: &mut Vec<PlacedLine>, y: &mut f32| {
        pages.push(std::mem::take(current));
        *y = PAGE_HEIGHT - MARGIN_TOP;
    };

    let mut rendered_anything = false;
    for section in &document.sections {
        if section.lines.is_empty() {
            continue;
        }
        rendered_anything = true;

        if y - HEADING_ADVANCE < MARGIN_BOTTOM {
            break_page(&mut current, &mut y);
        }
        current.push(PlacedLine {
            x: MARGIN_X,
            y: y - HEADING_SIZE,
            size: HEADING_SIZE,
            segments: vec![(FontKind::Bold, section.title.clone())],
        });
        y -= HEADING_ADVANCE + HEADING_SPACE_AFTER;

        for line in &section.lines {
            for row in wrap_line(line) {
                if y - BODY_LEADING < MARGIN_BOTTOM {
                    break_page(&mut current, &mut y);
                }
                let width: f32 = row
                    .iter()
                    .map(|(font, text)| text_width(text, *font, BODY_SIZE))
                    .sum();
                current.push(PlacedLine {
                    x: aligned_x(line.alignment, width),
                    y: y - BODY_SIZE,
                    size: BODY_SIZE,
                    segments: row,
                });
                y -= BODY_LEADING;
            }
            y -= LINE_SPACE_AFTER;
        }
        y -= SECTION_SPACE_AFTER;
    }

    if !rendered_anything {
        current.push(PlacedLine {
            x: MARGIN_X,
            y: PAGE_HEIGHT - MARGIN_TOP - BODY_SIZE,
            size: BODY_SIZE,
            segments: vec![(FontKind::Bold, "No content to display".to_string())],
        });
    }

    // A page break at the very end can leave an empty trailing page
    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    pages
}

fn aligned_x(alignment: Alignment, width: f32) -> f32 {
    let slack = (CONTENT_WIDTH - width).max(0.0);
    match alignment {
        Alignment::Left => MARGIN_X,
        Alignment::Center => MARGIN_X + slack / 2.0,
        Alignment::Right => MARGIN_X + slack,
    }
}

/// Split one logical line into rows that fit the content width.
///
/// The first row carries the bold "label:" prefix; continuation rows hold
/// overflowing value words. A word wider than the whole content width is
/// placed on its own row rather than hard-broken.
fn wrap_line(line: &ComposedLine) -> Vec<Vec<(FontKind, String)>> {
    let prefix = if line.label.is_empty() {
        None
    } else {
        Some(format!("{}:", line.label))
    };

    let mut rows: Vec<Vec<(FontKind, String)>> = Vec::new();
    let mut row: Vec<(FontKind, String)> = Vec::new();
    let mut row_width = 0.0_f32;

    if let Some(prefix) = prefix {
        row_width += text_width(&prefix, FontKind::Bold, BODY_SIZE);
        row.push((FontKind::Bold, prefix));
    }

    let mut value_text = String::new();
    for word in line.value.split_whitespace() {
        let candidate = if value_text.is_empty() && row.is_empty() {
            word.to_string()
        } else {
            format!(" {}", word)
        };
        let candidate_width = text_width(&candidate, FontKind::Regular, BODY_SIZE);

        if row_width + candidate_width > CONTENT_WIDTH && !(row.is_empty() && value_text.is_empty())
        {
            if !value_text.is_empty() {
                row.push((FontKind::Regular, std::mem::take(&mut value_text)));
            }
            rows.push(std::mem::take(&mut row));
            row_width = text_width(word, FontKind::Regular, BODY_SIZE);
            value_text = word.to_string();
        } else {
            row_width += candidate_width;
            value_text.push_str(&candidate);
        }
    }
    if !value_text.is_empty() {
        row.push((FontKind::Regular, value_text));
    }
    if !row.is_empty() {
        rows.push(row);
    }
    if rows.is_empty() {
        // Label and value both empty: keep the line's slot in the output
        rows.push(vec![(FontKind::Regular, String::new())]);
    }
    rows
}

/// Assemble the lopdf document from laid-out pages.
fn emit(pages: &[Vec<PlacedLine>]) -> Result<Vec<u8>, ComposeError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FontKind::Regular.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FontKind::Bold.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FontKind::Regular.resource_name() => regular_id,
            FontKind::Bold.resource_name() => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let mut operations = Vec::new();
        for line in page {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Td",
                vec![line.x.into(), line.y.into()],
            ));
            for (font, text) in &line.segments {
                operations.push(Operation::new(
                    "Tf",
                    vec![font.resource_name().into(), line.size.into()],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(encode_win_ansi(text))],
                ));
            }
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().map_err(ComposeError::Encode)?,
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ComposeError::Save(e.into()))?;
    Ok(bytes)
}

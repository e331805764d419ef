//! Rendering of block sequences into paginated PDF documents.
//!
//! The mapping is deliberately mechanical: each [`Block`] kind turns into the
//! matching `genpdf` element with its stylesheet entry applied, in source
//! order.  Pagination, line breaking and font metrics stay with `genpdf`.

use chrono::Local;
use genpdf::elements::{Break, BulletPoint, LinearLayout, Paragraph};
use genpdf::error::Error;
use genpdf::style::StyledString;
use genpdf::{Alignment, Element, Margins};

use crate::layout::PageSetup;
use crate::model::Block;
use crate::styles::StyleSheet;

// Vertical gaps between consecutive blocks, in line units.
const TITLE_GAP: f64 = 0.8;
const HEADING_GAP: f64 = 0.4;
const BODY_GAP: f64 = 0.3;
const HEADING_LEAD: f64 = 0.6;
const HEADER_GAP: f64 = 1.2;

/// Banner prepended to a generated document: a centered title line plus a
/// `Generated: <date>` stamp.
#[derive(Clone, Debug)]
pub struct DocumentHeader {
    title: String,
    generated: String,
}

impl DocumentHeader {
    /// Creates a header with an explicit generation label.
    pub fn new(title: impl Into<String>, generated: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated: generated.into(),
        }
    }

    /// Creates a header stamped with the current local date.
    pub fn dated_today(title: impl Into<String>) -> Self {
        Self::new(title, Local::now().format("%B %d, %Y").to_string())
    }

    /// Returns the banner title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the generation date label.
    pub fn generated(&self) -> &str {
        &self.generated
    }
}

/// A fully rendered PDF document.
pub struct RenderedPdf {
    /// The raw bytes of the PDF file.
    pub bytes: Vec<u8>,
}

/// Renders the block sequence into a PDF using the given stylesheet and page
/// setup, optionally prepending a document header banner.
pub fn render_document(
    blocks: &[Block],
    styles: &StyleSheet,
    setup: &PageSetup,
    header: Option<&DocumentHeader>,
) -> Result<RenderedPdf, Error> {
    let mut document = setup.build_document()?;
    let mut at_top = true;

    if let Some(header) = header {
        document.set_title(header.title());
        document.push(
            Paragraph::new(StyledString::new(header.title().to_owned(), styles.title()))
                .aligned(Alignment::Center),
        );
        document.push(Paragraph::new(StyledString::new(
            format!("Generated: {}", header.generated()),
            styles.body(),
        )));
        document.push(Break::new(HEADER_GAP));
        at_top = false;
    } else if let Some(Block::Title(title)) = blocks.first() {
        document.set_title(title.clone());
    }

    for block in blocks {
        append_block(&mut document, block, styles, at_top);
        at_top = false;
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(RenderedPdf { bytes })
}

fn append_block(document: &mut genpdf::Document, block: &Block, styles: &StyleSheet, at_top: bool) {
    match block {
        Block::Title(text) => {
            document.push(
                Paragraph::new(StyledString::new(text.clone(), styles.title()))
                    .aligned(Alignment::Center),
            );
            document.push(Break::new(TITLE_GAP));
        }
        Block::Heading1(text) => {
            if !at_top {
                document.push(Break::new(HEADING_LEAD));
            }
            document.push(Paragraph::new(StyledString::new(
                text.clone(),
                styles.heading1(),
            )));
            document.push(Break::new(HEADING_GAP));
        }
        Block::Heading2(text) => {
            if !at_top {
                document.push(Break::new(HEADING_LEAD));
            }
            document.push(Paragraph::new(StyledString::new(
                text.clone(),
                styles.heading2(),
            )));
            document.push(Break::new(HEADING_GAP));
        }
        Block::Body(text) | Block::NumberedItem(text) => {
            document.push(Paragraph::new(StyledString::new(
                text.clone(),
                styles.body(),
            )));
            document.push(Break::new(BODY_GAP));
        }
        Block::Bullet(text) => {
            document.push(
                BulletPoint::new(Paragraph::new(StyledString::new(
                    text.clone(),
                    styles.body(),
                )))
                .with_bullet(styles.bullet_glyph().to_owned()),
            );
        }
        Block::Code(text) => {
            let mut lines = LinearLayout::vertical();
            for line in text.split('\n') {
                if line.is_empty() {
                    lines.push(Break::new(1.0));
                } else {
                    lines.push(Paragraph::new(StyledString::new(
                        line.to_owned(),
                        styles.code(),
                    )));
                }
            }
            document.push(lines.padded(Margins::vh(1, 4)));
            document.push(Break::new(BODY_GAP));
        }
    }
}

//! Page geometry and document construction.

use crate::fonts;
use genpdf::elements::Paragraph;
use genpdf::error::{Error, ErrorKind};
use genpdf::style::{Color, Style};
use genpdf::{self, Alignment, Element, Margins, Mm, PageDecorator, Position, Size};

/// US letter paper, the page size the documentation set has always used.
const LETTER_WIDTH_MM: f64 = 215.9;
const LETTER_HEIGHT_MM: f64 = 279.4;

/// One inch of margin on every side.
const DEFAULT_MARGIN_MM: f64 = 25.4;

const FOOTER_HEIGHT_MM: f64 = 10.0;
const FOOTER_GRAY: Color = Color::Rgb(128, 128, 128);

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// Paper size, margins and footer configuration for generated documents.
#[derive(Clone, Debug)]
pub struct PageSetup {
    paper_width_mm: f64,
    paper_height_mm: f64,
    margin_mm: f64,
    page_numbers: bool,
}

impl PageSetup {
    /// US letter paper with one-inch margins and page-number footers.
    pub fn letter() -> Self {
        Self {
            paper_width_mm: LETTER_WIDTH_MM,
            paper_height_mm: LETTER_HEIGHT_MM,
            margin_mm: DEFAULT_MARGIN_MM,
            page_numbers: true,
        }
    }

    /// Sets the margin applied to every page side and returns the setup.
    pub fn with_margin_mm(mut self, margin_mm: f64) -> Self {
        self.margin_mm = margin_mm;
        self
    }

    /// Enables or disables the page-number footer and returns the setup.
    pub fn with_page_numbers(mut self, page_numbers: bool) -> Self {
        self.page_numbers = page_numbers;
        self
    }

    /// Builds a `genpdf::Document` with the default fonts installed and a
    /// page decorator applying this setup.
    pub fn build_document(&self) -> Result<genpdf::Document, Error> {
        let font_family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(font_family);
        document.set_paper_size(Size::new(
            mm_from_f64(self.paper_width_mm),
            mm_from_f64(self.paper_height_mm),
        ));
        document.set_page_decorator(MarginedPageDecorator::new(
            mm_from_f64(self.margin_mm),
            self.page_numbers,
        ));
        Ok(document)
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter()
    }
}

/// Applies margins to every page and reserves space for a centered
/// page-number footer at the bottom.
struct MarginedPageDecorator {
    page: usize,
    margin: Mm,
    page_numbers: bool,
}

impl MarginedPageDecorator {
    fn new(margin: Mm, page_numbers: bool) -> Self {
        Self {
            page: 0,
            margin,
            page_numbers,
        }
    }
}

fn footer_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(9);
    style.set_color(FOOTER_GRAY);
    style
}

impl PageDecorator for MarginedPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        self.page += 1;
        area.add_margins(Margins::all(self.margin));

        if self.page_numbers {
            let available = area.size().height;
            let footer_height = mm_from_f64(FOOTER_HEIGHT_MM);
            if footer_height > available {
                return Err(Error::new(
                    "Footer height exceeds available space",
                    ErrorKind::InvalidData,
                ));
            }

            let mut footer_area = area.clone();
            footer_area.add_offset(Position::new(0, available - footer_height));
            let mut footer = Paragraph::new(format!("Page {}", self.page))
                .aligned(Alignment::Center)
                .styled(footer_style());
            let result = footer.render(context, footer_area, style)?;
            if result.has_more {
                return Err(Error::new(
                    "Footer does not fit into the reserved space",
                    ErrorKind::PageSizeExceeded,
                ));
            }

            area.set_height(available - footer_height);
        }

        Ok(area)
    }
}

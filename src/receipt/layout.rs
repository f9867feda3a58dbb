//! Receipt Layout
//!
//! Places receipt text on fixed-size pages. Pagination depends only on the
//! number of lines and the vertical step between them, never on text width.

use std::mem;

use smallvec::SmallVec;

use crate::lines::AggregatedLine;

/// Title printed at the top of the first page of a non-empty receipt.
pub const RECEIPT_TITLE: &str = "Shopping list";

/// Message printed when the shopping cart has nothing in it.
pub const EMPTY_CART_MESSAGE: &str = "Your shopping cart is empty.";

/// Page geometry and font sizes used when laying out a receipt.
///
/// Distances and font sizes are in PDF points (1/72 inch). Positions are
/// measured from the bottom-left corner of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiptLayoutSettings {
    /// Page width
    pub page_width: f32,

    /// Page height
    pub page_height: f32,

    /// Horizontal position of every line
    pub left_margin: f32,

    /// Vertical position of the first line on each page
    pub top_margin: f32,

    /// A new page is started once the cursor drops below this position
    pub bottom_margin: f32,

    /// Vertical distance between consecutive lines
    pub line_step: f32,

    /// Font size of the title line
    pub title_font_size: f32,

    /// Font size of ingredient lines
    pub body_font_size: f32,

    /// Font size of the empty cart message
    pub empty_font_size: f32,
}

impl Default for ReceiptLayoutSettings {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            left_margin: 75.0,
            top_margin: 800.0,
            bottom_margin: 50.0,
            line_step: 25.0,
            title_font_size: 18.0,
            body_font_size: 14.0,
            empty_font_size: 24.0,
        }
    }
}

/// A run of text placed at a fixed position on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    /// Text content
    pub text: String,

    /// Horizontal position
    pub x: f32,

    /// Vertical position
    pub y: f32,

    /// Font size in points
    pub font_size: f32,
}

/// A single receipt page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptPage {
    texts: SmallVec<[PlacedText; 32]>,
}

impl ReceiptPage {
    /// Text placed on this page, top to bottom.
    #[must_use]
    pub fn texts(&self) -> &[PlacedText] {
        &self.texts
    }

    fn place(&mut self, text: impl Into<String>, x: f32, y: f32, font_size: f32) {
        self.texts.push(PlacedText {
            text: text.into(),
            x,
            y,
            font_size,
        });
    }
}

/// Laid out receipt, ready to be written by a document backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLayout {
    pages: SmallVec<[ReceiptPage; 2]>,
}

impl ReceiptLayout {
    /// Lay out aggregated lines onto pages.
    ///
    /// An empty slice produces a single page holding [`EMPTY_CART_MESSAGE`].
    /// Otherwise the first page starts with [`RECEIPT_TITLE`] followed by one
    /// numbered line per aggregated line.
    #[must_use]
    pub fn build(lines: &[AggregatedLine], settings: &ReceiptLayoutSettings) -> Self {
        if lines.is_empty() {
            return Self::empty(settings);
        }

        let mut pages = SmallVec::new();
        let mut page = ReceiptPage::default();
        let mut cursor = settings.top_margin;

        page.place(
            RECEIPT_TITLE,
            settings.left_margin,
            cursor,
            settings.title_font_size,
        );

        cursor -= settings.line_step;

        for (index, line) in lines.iter().enumerate() {
            if cursor < settings.bottom_margin {
                pages.push(mem::take(&mut page));
                cursor = settings.top_margin;
            }

            page.place(
                line.receipt_text(index + 1),
                settings.left_margin,
                cursor,
                settings.body_font_size,
            );

            cursor -= settings.line_step;
        }

        pages.push(page);

        Self { pages }
    }

    fn empty(settings: &ReceiptLayoutSettings) -> Self {
        let mut page = ReceiptPage::default();

        page.place(
            EMPTY_CART_MESSAGE,
            settings.left_margin,
            settings.top_margin,
            settings.empty_font_size,
        );

        let mut pages = SmallVec::new();

        pages.push(page);

        Self { pages }
    }

    /// Pages in print order. Always contains at least one page.
    #[must_use]
    pub fn pages(&self) -> &[ReceiptPage] {
        &self.pages
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every piece of text in print order, across all pages.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.texts.iter().map(|placed| placed.text.as_str()))
    }
}

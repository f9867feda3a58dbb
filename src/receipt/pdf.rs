//! PDF Receipt Renderer

use printpdf::{Mm, PdfDocument, Pt};

use crate::{
    lines::AggregatedLine,
    receipt::{
        ReceiptError, ReceiptRenderer, RenderedReceipt,
        font::ReceiptFont,
        layout::{ReceiptLayout, ReceiptLayoutSettings},
    },
};

const DOCUMENT_TITLE: &str = "Shopping cart";
const LAYER_NAME: &str = "Receipt";

/// Media type of documents produced by [`PdfReceiptRenderer`].
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Writes receipts as paginated PDF documents.
#[derive(Debug, Clone, Default)]
pub struct PdfReceiptRenderer {
    font: ReceiptFont,
    settings: ReceiptLayoutSettings,
}

impl PdfReceiptRenderer {
    /// Create a renderer using the given font and layout settings.
    #[must_use]
    pub fn new(font: ReceiptFont, settings: ReceiptLayoutSettings) -> Self {
        Self { font, settings }
    }

    /// Layout settings used by this renderer.
    #[must_use]
    pub fn settings(&self) -> &ReceiptLayoutSettings {
        &self.settings
    }

    fn write(&self, layout: &ReceiptLayout) -> Result<RenderedReceipt, ReceiptError> {
        let font = self.font.load()?;

        font.ensure_covers(layout.texts())?;

        let width = Mm::from(Pt(self.settings.page_width));
        let height = Mm::from(Pt(self.settings.page_height));

        let (doc, first_page, first_layer) =
            PdfDocument::new(DOCUMENT_TITLE, width, height, LAYER_NAME);

        let font = font.register(&doc)?;

        for (index, page) in layout.pages().iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);

                doc.get_page(page_index).get_layer(layer_index)
            };

            for placed in page.texts() {
                layer.use_text(
                    placed.text.as_str(),
                    placed.font_size,
                    Mm::from(Pt(placed.x)),
                    Mm::from(Pt(placed.y)),
                    &font,
                );
            }
        }

        let bytes = doc.save_to_bytes().map_err(ReceiptError::Document)?;

        Ok(RenderedReceipt::new(bytes, layout.page_count()))
    }
}

impl ReceiptRenderer for PdfReceiptRenderer {
    fn render(&self, lines: &[AggregatedLine]) -> Result<RenderedReceipt, ReceiptError> {
        self.write(&ReceiptLayout::build(lines, &self.settings))
    }

    fn content_type(&self) -> &'static str {
        PDF_CONTENT_TYPE
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use printpdf::BuiltinFont;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn renders_pdf_document() -> TestResult {
        let receipt = PdfReceiptRenderer::default().render(&[AggregatedLine::new(
            "Flour",
            "g",
            Decimal::from(500),
        )])?;

        assert!(receipt.as_bytes().starts_with(b"%PDF"), "expected a PDF header");

        Ok(())
    }

    #[test]
    fn renders_empty_cart() -> TestResult {
        let receipt = PdfReceiptRenderer::default().render(&[])?;

        assert!(!receipt.is_empty(), "expected document bytes");
        assert_eq!(receipt.page_count(), 1);

        Ok(())
    }

    #[test]
    fn renders_cyrillic_lines_with_default_font() -> TestResult {
        let receipt = PdfReceiptRenderer::default().render(&[AggregatedLine::new(
            "Мука",
            "г",
            Decimal::from(500),
        )])?;

        assert_eq!(receipt.page_count(), 1);

        Ok(())
    }

    #[test]
    fn builtin_font_refuses_text_it_cannot_draw() {
        let renderer = PdfReceiptRenderer::new(
            ReceiptFont::Builtin(BuiltinFont::Helvetica),
            ReceiptLayoutSettings::default(),
        );

        let result = renderer.render(&[AggregatedLine::new("Мука", "г", Decimal::from(500))]);

        assert!(
            matches!(result, Err(ReceiptError::UnsupportedCharacter { .. })),
            "expected UnsupportedCharacter, got {result:?}"
        );
    }

    #[test]
    fn missing_font_file_fails_render() {
        let renderer = PdfReceiptRenderer::new(
            ReceiptFont::File(PathBuf::from("/nonexistent/receipt-font.ttf")),
            ReceiptLayoutSettings::default(),
        );

        let result = renderer.render(&[]);

        assert!(
            matches!(result, Err(ReceiptError::FontLoad { .. })),
            "expected FontLoad, got {result:?}"
        );
    }
}

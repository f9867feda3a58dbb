//! Receipt
//!
//! Turns aggregated shopping cart lines into a downloadable document.

use std::{fmt, io::Cursor, path::PathBuf};

use thiserror::Error;

use crate::lines::AggregatedLine;

pub mod font;
pub mod layout;
pub mod pdf;

pub use font::ReceiptFont;
pub use printpdf::BuiltinFont;
pub use layout::{ReceiptLayout, ReceiptLayoutSettings};
pub use pdf::PdfReceiptRenderer;

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The font file could not be read.
    #[error("failed to load font from {}", path.display())]
    FontLoad {
        /// Location of the font file
        path: PathBuf,

        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The font file is not a usable TrueType font.
    #[error("failed to parse font")]
    FontParse(#[source] owned_ttf_parser::FaceParsingError),

    /// The document rejected the font.
    #[error("failed to register font")]
    FontRegistration(#[source] printpdf::Error),

    /// The font has no glyph for a character in the receipt text.
    #[error("font {font} cannot draw {character:?}")]
    UnsupportedCharacter {
        /// First character without a glyph
        character: char,

        /// Font that was asked to draw it
        font: String,
    },

    /// The document could not be finalised.
    #[error("failed to finalise receipt document")]
    Document(#[source] printpdf::Error),
}

impl ReceiptError {
    /// Whether the failure was caused by the configured font.
    #[must_use]
    pub fn is_font_error(&self) -> bool {
        matches!(
            self,
            Self::FontLoad { .. }
                | Self::FontParse(_)
                | Self::FontRegistration(_)
                | Self::UnsupportedCharacter { .. }
        )
    }
}

/// Renders aggregated lines into a finished document.
pub trait ReceiptRenderer: Send + Sync {
    /// Render the given lines, in order.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] when the font cannot be registered, cannot
    /// draw every character of the receipt, or the document cannot be
    /// finalised. Failures are not retried.
    fn render(&self, lines: &[AggregatedLine]) -> Result<RenderedReceipt, ReceiptError>;

    /// Media type of the rendered documents.
    fn content_type(&self) -> &'static str;
}

/// A finalised receipt document held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct RenderedReceipt {
    bytes: Vec<u8>,
    page_count: usize,
}

impl RenderedReceipt {
    /// Wrap finished document bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>, page_count: usize) -> Self {
        Self { bytes, page_count }
    }

    /// Document bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the receipt, returning the document bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Consume the receipt, returning a seekable reader over the document.
    #[must_use]
    pub fn into_cursor(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.bytes)
    }

    /// Document size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the document has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of pages in the document.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl fmt::Debug for RenderedReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedReceipt")
            .field("len", &self.bytes.len())
            .field("page_count", &self.page_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Seek, SeekFrom};

    use testresult::TestResult;

    use super::*;

    #[test]
    fn cursor_is_seekable() -> TestResult {
        let mut cursor = RenderedReceipt::new(b"%PDF-1.3".to_vec(), 1).into_cursor();

        cursor.seek(SeekFrom::Start(5))?;

        let mut rest = String::new();
        cursor.read_to_string(&mut rest)?;

        assert_eq!(rest, "1.3");

        Ok(())
    }

    #[test]
    fn debug_hides_document_bytes() {
        let receipt = RenderedReceipt::new(vec![0_u8; 4], 1);

        assert_eq!(
            format!("{receipt:?}"),
            "RenderedReceipt { len: 4, page_count: 1 }"
        );
    }

    #[test]
    fn font_errors_are_classified() {
        let error = ReceiptError::FontLoad {
            path: PathBuf::from("missing.ttf"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(error.is_font_error());
    }

    #[test]
    fn missing_glyphs_are_font_errors() {
        let error = ReceiptError::UnsupportedCharacter {
            character: 'г',
            font: "Helvetica".to_string(),
        };

        assert!(error.is_font_error());
        assert_eq!(error.to_string(), "font Helvetica cannot draw 'г'");
    }
}

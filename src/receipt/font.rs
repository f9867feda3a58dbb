//! Receipt Fonts

use std::{borrow::Cow, fs, path::PathBuf};

use owned_ttf_parser::Face;
use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference, lopdf};

use crate::receipt::ReceiptError;

/// DejaVu Sans, covering Latin, Greek and Cyrillic scripts.
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const BUNDLED_FONT_NAME: &str = "DejaVu Sans";

/// Encoding printpdf selects for the standard PDF fonts.
const WIN_ANSI_ENCODING: &str = "WinAnsiEncoding";

/// Typeface used for every line of a receipt.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReceiptFont {
    /// DejaVu Sans, shipped with the crate and embedded into every document.
    #[default]
    Bundled,

    /// One of the standard PDF fonts. These only cover Windows-1252, so any
    /// other character makes the render fail.
    Builtin(BuiltinFont),

    /// A TrueType font read from disk and embedded into the document.
    File(PathBuf),
}

impl ReceiptFont {
    /// Read the font data needed for one render.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::FontLoad`] when the font file cannot be read.
    pub(crate) fn load(&self) -> Result<LoadedFont, ReceiptError> {
        match self {
            Self::Bundled => Ok(LoadedFont::Embedded {
                name: BUNDLED_FONT_NAME.to_string(),
                bytes: Cow::Borrowed(BUNDLED_FONT),
            }),
            Self::Builtin(font) => Ok(LoadedFont::Builtin(*font)),
            Self::File(path) => {
                let bytes = fs::read(path).map_err(|source| ReceiptError::FontLoad {
                    path: path.clone(),
                    source,
                })?;

                Ok(LoadedFont::Embedded {
                    name: path.display().to_string(),
                    bytes: Cow::Owned(bytes),
                })
            }
        }
    }
}

/// Font data held for the duration of a single render.
#[derive(Debug)]
pub(crate) enum LoadedFont {
    Builtin(BuiltinFont),
    Embedded {
        name: String,
        bytes: Cow<'static, [u8]>,
    },
}

impl LoadedFont {
    /// Check that every character of `texts` can be drawn with this font.
    ///
    /// printpdf skips characters a font cannot draw, so this runs before
    /// anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::UnsupportedCharacter`] for the first character
    /// without a glyph, or [`ReceiptError::FontParse`] when an embedded font
    /// cannot be parsed.
    pub(crate) fn ensure_covers<'a>(
        &self,
        texts: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), ReceiptError> {
        match self {
            Self::Builtin(font) => {
                let name: &'static str = (*font).into();

                check_characters(texts, name, encodes_in_win_ansi)
            }
            Self::Embedded { name, bytes } => {
                let face = Face::parse(bytes.as_ref(), 0).map_err(ReceiptError::FontParse)?;

                check_characters(texts, name, |character| {
                    face.glyph_index(character).is_some()
                })
            }
        }
    }

    /// Register the font with a document.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::FontRegistration`] when the document rejects
    /// the font.
    pub(crate) fn register(
        &self,
        doc: &PdfDocumentReference,
    ) -> Result<IndirectFontRef, ReceiptError> {
        match self {
            Self::Builtin(font) => doc
                .add_builtin_font(*font)
                .map_err(ReceiptError::FontRegistration),
            Self::Embedded { bytes, .. } => doc
                .add_external_font(bytes.as_ref())
                .map_err(ReceiptError::FontRegistration),
        }
    }
}

fn check_characters<'a>(
    texts: impl IntoIterator<Item = &'a str>,
    font: &str,
    supported: impl Fn(char) -> bool,
) -> Result<(), ReceiptError> {
    let unsupported = texts
        .into_iter()
        .flat_map(str::chars)
        .find(|character| !supported(*character));

    match unsupported {
        Some(character) => Err(ReceiptError::UnsupportedCharacter {
            character,
            font: font.to_string(),
        }),
        None => Ok(()),
    }
}

fn encodes_in_win_ansi(character: char) -> bool {
    let mut buffer = [0_u8; 4];

    !lopdf::Document::encode_text(Some(WIN_ANSI_ENCODING), character.encode_utf8(&mut buffer))
        .is_empty()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn bundled_font_covers_cyrillic() -> TestResult {
        ReceiptFont::Bundled
            .load()?
            .ensure_covers(["1. Мука – 500 г.", "Shopping list"])?;

        Ok(())
    }

    #[test]
    fn builtin_font_accepts_windows_1252() -> TestResult {
        ReceiptFont::Builtin(BuiltinFont::Helvetica)
            .load()?
            .ensure_covers(["1. Crème fraîche – 200 g.", "€ ‰ ™"])?;

        Ok(())
    }

    #[test]
    fn builtin_font_rejects_cyrillic() -> TestResult {
        let result = ReceiptFont::Builtin(BuiltinFont::Helvetica)
            .load()?
            .ensure_covers(["1. Мука – 500 г."]);

        assert!(
            matches!(
                result,
                Err(ReceiptError::UnsupportedCharacter { character: 'М', .. })
            ),
            "expected the first Cyrillic letter to be reported, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn missing_font_file_is_a_load_error() {
        let result = ReceiptFont::File(PathBuf::from("/nonexistent/receipt-font.ttf")).load();

        assert!(
            matches!(result, Err(ReceiptError::FontLoad { .. })),
            "expected FontLoad, got {result:?}"
        );
    }

    #[test]
    fn unparseable_font_file_is_rejected() {
        let font = LoadedFont::Embedded {
            name: "garbage".to_string(),
            bytes: Cow::Borrowed(b"not a font"),
        };

        let result = font.ensure_covers(["Flour"]);

        assert!(
            matches!(result, Err(ReceiptError::FontParse(_))),
            "expected FontParse, got {result:?}"
        );
    }
}

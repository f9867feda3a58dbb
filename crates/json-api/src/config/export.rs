//! Export Config

use std::path::PathBuf;

use clap::Args;
use pantry::receipt::ReceiptFont;
use pantry_app::{context::ExportSettings, domain::shopping_cart::DEFAULT_EXPORT_FILENAME};

/// Shopping cart export settings.
#[derive(Debug, Args)]
pub struct ExportConfig {
    /// File name offered when downloading a shopping cart
    #[arg(
        long,
        env = "SHOPPING_CART_FILENAME",
        default_value = DEFAULT_EXPORT_FILENAME,
        value_parser = parse_export_filename
    )]
    pub shopping_cart_filename: String,

    /// TrueType font embedded in receipts; the bundled DejaVu Sans when unset
    #[arg(long, env = "RECEIPT_FONT_PATH")]
    pub receipt_font_path: Option<PathBuf>,
}

impl ExportConfig {
    /// Convert into application export settings.
    #[must_use]
    pub fn into_settings(self) -> ExportSettings {
        ExportSettings {
            filename: self.shopping_cart_filename,
            font: self
                .receipt_font_path
                .map_or_else(ReceiptFont::default, ReceiptFont::File),
        }
    }
}

/// Accept a bare file name that can be quoted inside a `Content-Disposition`
/// header. Non-ASCII names are allowed.
fn parse_export_filename(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("shopping cart filename cannot be empty".to_string());
    }

    if let Some(character) = raw
        .chars()
        .find(|character| character.is_control() || matches!(character, '"' | '\\' | '/'))
    {
        return Err(format!(
            "shopping cart filename cannot contain {character:?}"
        ));
    }

    Ok(raw.to_string())
}

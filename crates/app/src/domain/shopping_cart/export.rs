//! Shopping cart export.
//!
//! Loads a user's cart lines, merges them per ingredient and unit, and
//! renders the result as a receipt document.

use std::{fmt, sync::Arc};

use pantry::{
    aggregate::aggregate,
    receipt::{ReceiptRenderer, RenderedReceipt},
};
use tracing::{debug, warn};

use crate::domain::{
    shopping_cart::{errors::ShoppingCartExportError, service::ShoppingCartService},
    users::records::UserUuid,
};

/// Default download file name for exported carts.
pub const DEFAULT_EXPORT_FILENAME: &str = "shoppingcart.pdf";

/// A rendered shopping cart, ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct ShoppingCartExport {
    /// File name offered to the client.
    pub filename: String,

    /// Media type of the document.
    pub content_type: &'static str,

    /// Number of aggregated lines printed.
    pub line_count: usize,

    /// Finished document.
    pub receipt: RenderedReceipt,
}

/// Aggregates and renders shopping carts.
#[derive(Clone)]
pub struct ShoppingCartExporter {
    cart: Arc<dyn ShoppingCartService>,
    renderer: Arc<dyn ReceiptRenderer>,
    filename: String,
}

impl ShoppingCartExporter {
    /// Create an exporter reading carts from `cart` and rendering them with
    /// `renderer`. Every export is offered under `filename`.
    #[must_use]
    pub fn new(
        cart: Arc<dyn ShoppingCartService>,
        renderer: Arc<dyn ReceiptRenderer>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            cart,
            renderer,
            filename: filename.into(),
        }
    }

    /// File name offered for downloads.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Export the user's shopping cart.
    ///
    /// Reads the cart once; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`ShoppingCartExportError::Cart`] when the cart cannot be loaded
    /// and [`ShoppingCartExportError::Render`] when the receipt cannot be rendered.
    pub async fn export(&self, user: UserUuid) -> Result<ShoppingCartExport, ShoppingCartExportError> {
        let lines = self.cart.cart_lines(user).await?;
        let line_items = lines.len();

        let aggregated = aggregate(lines);

        debug!(
            user = %user,
            line_items,
            aggregated_lines = aggregated.len(),
            "aggregated shopping cart"
        );

        let receipt = self.renderer.render(&aggregated).map_err(|error| {
            warn!(user = %user, error = %error, "failed to render shopping cart receipt");

            ShoppingCartExportError::Render(error)
        })?;

        Ok(ShoppingCartExport {
            filename: self.filename.clone(),
            content_type: self.renderer.content_type(),
            line_count: aggregated.len(),
            receipt,
        })
    }
}

impl fmt::Debug for ShoppingCartExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoppingCartExporter")
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}

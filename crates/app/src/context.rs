//! App Context

use std::sync::Arc;

use pantry::receipt::{PdfReceiptRenderer, ReceiptFont, ReceiptLayoutSettings, ReceiptRenderer};
use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db, PoolSettings},
    domain::{
        favorites::{FavoritesService, PgFavoritesService},
        recipes::{PgRecipesService, RecipesService},
        shopping_cart::{
            DEFAULT_EXPORT_FILENAME, PgShoppingCartService, ShoppingCartExporter,
            ShoppingCartService,
        },
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Settings for shopping cart exports.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// File name offered for downloaded carts.
    pub filename: String,

    /// Typeface used on receipts.
    pub font: ReceiptFont,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
            font: ReceiptFont::default(),
        }
    }
}

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// Resolves access tokens to users.
    pub auth: Arc<dyn AuthService>,

    /// Recipe and ingredient catalogue.
    pub recipes: Arc<dyn RecipesService>,

    /// Shopping cart membership and cart lines.
    pub shopping_cart: Arc<dyn ShoppingCartService>,

    /// Favorite recipes.
    pub favorites: Arc<dyn FavoritesService>,

    /// Renders shopping carts as downloadable receipts.
    pub exporter: ShoppingCartExporter,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        pool: PoolSettings,
        export: ExportSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, pool)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool), export))
    }

    /// Build application context over an existing pool.
    #[must_use]
    pub fn from_db(db: Db, export: ExportSettings) -> Self {
        let shopping_cart: Arc<dyn ShoppingCartService> =
            Arc::new(PgShoppingCartService::new(db.clone()));

        let renderer: Arc<dyn ReceiptRenderer> = Arc::new(PdfReceiptRenderer::new(
            export.font,
            ReceiptLayoutSettings::default(),
        ));

        Self {
            auth: Arc::new(PgAuthService::new(db.pool().clone())),
            recipes: Arc::new(PgRecipesService::new(db.clone())),
            favorites: Arc::new(PgFavoritesService::new(db)),
            exporter: ShoppingCartExporter::new(shopping_cart.clone(), renderer, export.filename),
            shopping_cart,
        }
    }
}

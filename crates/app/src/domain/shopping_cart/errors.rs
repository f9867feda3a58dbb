//! Shopping cart errors.

use pantry::receipt::ReceiptError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShoppingCartServiceError {
    #[error("recipe is already in the shopping cart")]
    AlreadyInCart,

    #[error("recipe is not in the shopping cart")]
    NotInCart,

    #[error("recipe not found")]
    RecipeNotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ShoppingCartServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::RecipeNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyInCart,
            Some(ErrorKind::ForeignKeyViolation) => Self::RecipeNotFound,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// Errors that can occur while exporting a shopping cart.
#[derive(Debug, Error)]
pub enum ShoppingCartExportError {
    /// The cart contents could not be loaded.
    #[error("failed to load shopping cart")]
    Cart(#[from] ShoppingCartServiceError),

    /// The receipt could not be rendered.
    #[error("failed to render shopping cart receipt")]
    Render(#[from] ReceiptError),
}

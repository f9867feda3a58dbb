//! Shopping Cart Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::shopping_cart::{ShoppingCartExportError, ShoppingCartServiceError};

pub(crate) fn into_status_error(error: ShoppingCartServiceError) -> StatusError {
    match error {
        ShoppingCartServiceError::AlreadyInCart => {
            StatusError::bad_request().brief("Recipe is already in the shopping cart")
        }
        ShoppingCartServiceError::NotInCart => {
            StatusError::not_found().brief("Recipe is not in the shopping cart")
        }
        ShoppingCartServiceError::RecipeNotFound => {
            StatusError::not_found().brief("Recipe not found")
        }
        ShoppingCartServiceError::Sql(source) => {
            error!("shopping cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn export_status_error(error: ShoppingCartExportError) -> StatusError {
    match error {
        ShoppingCartExportError::Cart(source) => {
            error!("failed to load shopping cart for export: {source}");
        }
        ShoppingCartExportError::Render(source) if source.is_font_error() => {
            error!("receipt font unavailable: {source}");
        }
        ShoppingCartExportError::Render(source) => {
            error!("failed to render shopping cart receipt: {source}");
        }
    }

    StatusError::internal_server_error()
}

//! Favorite Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::favorites::FavoritesServiceError;

pub(crate) fn into_status_error(error: FavoritesServiceError) -> StatusError {
    match error {
        FavoritesServiceError::AlreadyFavorited => {
            StatusError::bad_request().brief("Recipe is already a favorite")
        }
        FavoritesServiceError::NotFavorited => {
            StatusError::not_found().brief("Recipe is not a favorite")
        }
        FavoritesServiceError::RecipeNotFound => StatusError::not_found().brief("Recipe not found"),
        FavoritesServiceError::Sql(source) => {
            error!("favorites storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

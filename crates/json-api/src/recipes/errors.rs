//! Recipe Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::recipes::RecipesServiceError;

pub(crate) fn into_status_error(error: RecipesServiceError) -> StatusError {
    match error {
        RecipesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Recipe already exists")
        }
        RecipesServiceError::Invalid(reason) => StatusError::bad_request().brief(reason.to_string()),
        RecipesServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown ingredient")
        }
        RecipesServiceError::MissingRequiredData | RecipesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid recipe payload")
        }
        RecipesServiceError::NotFound => StatusError::not_found().brief("Recipe not found"),
        RecipesServiceError::NotAuthor => {
            StatusError::forbidden().brief("Only the author can change this recipe")
        }
        RecipesServiceError::Sql(source) => {
            error!("recipe storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

//! Favorites service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FavoritesServiceError {
    #[error("recipe is already a favorite")]
    AlreadyFavorited,

    #[error("recipe is not a favorite")]
    NotFavorited,

    #[error("recipe not found")]
    RecipeNotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for FavoritesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::RecipeNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyFavorited,
            Some(ErrorKind::ForeignKeyViolation) => Self::RecipeNotFound,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

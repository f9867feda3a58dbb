//! Recipes service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::recipes::validation::RecipeValidationError;

#[derive(Debug, Error)]
pub enum RecipesServiceError {
    #[error("recipe already exists")]
    AlreadyExists,

    #[error("recipe not found")]
    NotFound,

    #[error("recipe belongs to another user")]
    NotAuthor,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("invalid recipe")]
    Invalid(#[from] RecipeValidationError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for RecipesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

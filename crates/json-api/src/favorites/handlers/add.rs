//! Add Favorite Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*, favorites::errors::into_status_error, recipes::RecipeSummaryResponse,
};

/// Add Favorite Handler
///
/// Marks a recipe as one of the caller's favorites.
#[endpoint(
    tags("favorites"),
    summary = "Favorite Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Recipe favorited"),
        (status_code = StatusCode::BAD_REQUEST, description = "Recipe already a favorite"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RecipeSummaryResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let user = depot.user_uuid_or_401()?;

    let summary = state
        .app
        .favorites
        .add_favorite(user, recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(summary.into()))
}

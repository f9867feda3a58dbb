//! Get Recipe Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    recipes::{errors::into_status_error, models::RecipeResponse},
};

/// Get Recipe Handler
///
/// Returns a recipe with its ingredients and the caller's favorite and
/// shopping cart flags.
#[endpoint(
    tags("recipes"),
    summary = "Get Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Recipe"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RecipeResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let user = depot.user_uuid_or_401()?;

    let recipe = state
        .app
        .recipes
        .get_recipe(user, recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(recipe.into()))
}

//! Update Recipe Handler

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use pantry_app::domain::recipes::data::RecipeUpdate;

use crate::{
    extensions::*,
    recipes::{
        create::CreateRecipeRequest, errors::into_status_error, models::RecipeResponse,
    },
};

impl From<CreateRecipeRequest> for RecipeUpdate {
    fn from(request: CreateRecipeRequest) -> Self {
        RecipeUpdate {
            name: request.name,
            text: request.text,
            image: request.image,
            cooking_time: request.cooking_time,
            ingredients: request
                .ingredients
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Update Recipe Handler
///
/// Replaces a recipe written by the caller. The body has the same shape as
/// the one used to create it, and the ingredient list is replaced whole.
#[endpoint(
    tags("recipes"),
    summary = "Update Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Recipe updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid recipe"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::FORBIDDEN, description = "Recipe belongs to another user"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "recipes.update",
    skip(recipe, json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        recipe_uuid = tracing::field::Empty,
        ingredients_count = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    json: JsonBody<CreateRecipeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RecipeResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let user = depot.user_uuid_or_401()?;
    let request = json.into_inner();
    let recipe = recipe.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("recipe_uuid", tracing::field::display(recipe));
    span.record(
        "ingredients_count",
        tracing::field::display(request.ingredients.len()),
    );

    let updated = state
        .app
        .recipes
        .update_recipe(user, recipe.into(), request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/recipes/{recipe}"), true)
        .or_500("location header")?
        .status_code(StatusCode::OK);

    tracing::info!(recipe_uuid = %recipe, "updated recipe");

    Ok(Json(updated.into()))
}

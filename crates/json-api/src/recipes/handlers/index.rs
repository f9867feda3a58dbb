//! Recipe Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};
use uuid::Uuid;

use pantry_app::domain::recipes::data::{
    DEFAULT_PAGE_LIMIT, PageRequest, RecipeFilter,
};

use crate::{
    extensions::*,
    recipes::{errors::into_status_error, models::RecipeListResponse},
};

/// Query flags are `1` to filter and `0` (or absent) to list everything.
fn flag(value: QueryParam<u8, false>) -> bool {
    value.into_inner().is_some_and(|flag| flag != 0)
}

/// Recipe Index Handler
///
/// Lists recipes newest first, one page at a time. `is_favorited` and
/// `is_in_shopping_cart` restrict the list to the caller's own marks.
#[endpoint(
    tags("recipes"),
    summary = "List Recipes",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Page of recipes"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid query"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    author: QueryParam<Uuid, false>,
    is_favorited: QueryParam<u8, false>,
    is_in_shopping_cart: QueryParam<u8, false>,
    depot: &mut Depot,
) -> Result<Json<RecipeListResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let user = depot.user_uuid_or_401()?;

    let filter = RecipeFilter {
        author: author.into_inner().map(Into::into),
        is_favorited: flag(is_favorited),
        is_in_shopping_cart: flag(is_in_shopping_cart),
    };

    let page = PageRequest::new(
        page.into_inner().unwrap_or(1),
        limit.into_inner().unwrap_or(DEFAULT_PAGE_LIMIT),
    );

    let recipes = state
        .app
        .recipes
        .list_recipes(user, filter, page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(recipes.into()))
}

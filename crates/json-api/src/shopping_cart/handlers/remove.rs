//! Remove From Shopping Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, shopping_cart::errors::into_status_error};

/// Remove From Shopping Cart Handler
#[endpoint(
    tags("shopping_cart"),
    summary = "Remove Recipe From Shopping Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Recipe removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not in shopping cart"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let user = depot.user_uuid_or_401()?;

    state
        .app
        .shopping_cart
        .remove_recipe(user, recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

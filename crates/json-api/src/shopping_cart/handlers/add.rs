//! Add To Shopping Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*, recipes::RecipeSummaryResponse, shopping_cart::errors::into_status_error,
};

/// Add To Shopping Cart Handler
///
/// Adds a recipe to the caller's shopping cart.
#[endpoint(
    tags("shopping_cart"),
    summary = "Add Recipe To Shopping Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Recipe added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Recipe already in shopping cart"),
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
        .shopping_cart
        .add_recipe(user, recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pantry_app::domain::{
        recipes::records::RecipeUuid,
        shopping_cart::{MockShoppingCartService, ShoppingCartServiceError},
    };

    use crate::test_helpers::{TEST_USER_UUID, make_summary, shopping_cart_service};

    use super::*;

    fn make_service(cart: MockShoppingCartService) -> Service {
        shopping_cart_service(
            cart,
            Router::with_path("recipes/{recipe}/shopping_cart").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_recipe_returns_201_with_summary() -> TestResult {
        let uuid = RecipeUuid::new();

        let mut cart = MockShoppingCartService::new();

        cart.expect_add_recipe()
            .once()
            .withf(move |user, recipe| *user == TEST_USER_UUID && *recipe == uuid)
            .return_once(move |_, _| Ok(make_summary(uuid)));

        cart.expect_remove_recipe().never();
        cart.expect_cart_lines().never();

        let mut res = TestClient::post(format!("http://example.com/recipes/{uuid}/shopping_cart"))
            .send(&make_service(cart))
            .await;

        let body: RecipeSummaryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.cooking_time, 20);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_recipe_twice_returns_400() -> TestResult {
        let uuid = RecipeUuid::new();

        let mut cart = MockShoppingCartService::new();

        cart.expect_add_recipe()
            .once()
            .return_once(|_, _| Err(ShoppingCartServiceError::AlreadyInCart));

        cart.expect_remove_recipe().never();
        cart.expect_cart_lines().never();

        let res = TestClient::post(format!("http://example.com/recipes/{uuid}/shopping_cart"))
            .send(&make_service(cart))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_recipe_returns_404() -> TestResult {
        let uuid = RecipeUuid::new();

        let mut cart = MockShoppingCartService::new();

        cart.expect_add_recipe()
            .once()
            .return_once(|_, _| Err(ShoppingCartServiceError::RecipeNotFound));

        cart.expect_remove_recipe().never();
        cart.expect_cart_lines().never();

        let res = TestClient::post(format!("http://example.com/recipes/{uuid}/shopping_cart"))
            .send(&make_service(cart))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}

//! Create Recipe Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::domain::recipes::{
    data::{NewRecipe, NewRecipeIngredient},
    records::RecipeUuid,
};

use crate::{
    extensions::*,
    recipes::{errors::into_status_error, models::RecipeResponse},
};

/// Ingredient quantity in a new recipe
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRecipeIngredientRequest {
    /// Ingredient UUID
    pub id: Uuid,

    /// Amount in the ingredient's measurement unit
    pub amount: u32,
}

/// Create Recipe Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRecipeRequest {
    pub name: String,
    pub text: String,
    pub image: String,
    pub cooking_time: u32,
    pub ingredients: Vec<CreateRecipeIngredientRequest>,
}

impl From<CreateRecipeRequest> for NewRecipe {
    fn from(request: CreateRecipeRequest) -> Self {
        NewRecipe {
            uuid: RecipeUuid::new(),
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

impl From<CreateRecipeIngredientRequest> for NewRecipeIngredient {
    fn from(ingredient: CreateRecipeIngredientRequest) -> Self {
        NewRecipeIngredient {
            ingredient_uuid: ingredient.id.into(),
            amount: ingredient.amount.into(),
        }
    }
}

/// Create Recipe Handler
///
/// Creates a recipe authored by the caller.
#[endpoint(
    tags("recipes"),
    summary = "Create Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Recipe created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid recipe"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRecipeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RecipeResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let user = depot.user_uuid_or_401()?;

    let recipe = state
        .app
        .recipes
        .create_recipe(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/recipes/{}", recipe.uuid), true)
        .or_500("location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(recipe.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use pantry_app::domain::recipes::{
        MockRecipesService, RecipesServiceError, records::IngredientUuid,
        validation::RecipeValidationError,
    };

    use crate::test_helpers::{TEST_USER_UUID, make_recipe, recipes_service, strict_recipes_mock};

    use super::*;

    fn make_service(recipes: MockRecipesService) -> Service {
        recipes_service(recipes, Router::with_path("recipes").post(handler))
    }

    fn payload(ingredient: IngredientUuid) -> serde_json::Value {
        json!({
            "name": "Pancakes",
            "text": "Whisk and fry.",
            "image": "recipes/images/pancakes.png",
            "cooking_time": 20,
            "ingredients": [{ "id": ingredient.into_uuid(), "amount": 250 }],
        })
    }

    #[tokio::test]
    async fn test_create_recipe_success() -> TestResult {
        let ingredient = IngredientUuid::new();

        let mut recipes = MockRecipesService::new();

        recipes.expect_create_ingredient().never();
        recipes.expect_get_recipe().never();
        recipes
            .expect_create_recipe()
            .once()
            .withf(move |author, new| {
                *author == TEST_USER_UUID
                    && new.name == "Pancakes"
                    && new.cooking_time == 20
                    && new.ingredients.as_slice()
                        == [NewRecipeIngredient {
                            ingredient_uuid: ingredient,
                            amount: Decimal::from(250),
                        }]
            })
            .return_once(|_, new| Ok(make_recipe(new.uuid)));

        let mut res = TestClient::post("http://example.com/recipes")
            .json(&payload(ingredient))
            .send(&make_service(recipes))
            .await;

        let body: RecipeResponse = res.take_json().await?;
        let location = res
            .headers()
            .get(LOCATION)
            .map(|value| value.to_str())
            .transpose()?
            .map(str::to_owned);

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/recipes/{}", body.id)));
        assert_eq!(body.name, "Pancakes");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_recipe_validation_error_returns_400() -> TestResult {
        let mut recipes = MockRecipesService::new();

        recipes.expect_create_ingredient().never();
        recipes.expect_get_recipe().never();
        recipes
            .expect_create_recipe()
            .once()
            .return_once(|_, _| Err(RecipeValidationError::CookingTimeTooShort.into()));

        let res = TestClient::post("http://example.com/recipes")
            .json(&payload(IngredientUuid::new()))
            .send(&make_service(recipes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_recipe_unknown_ingredient_returns_400() -> TestResult {
        let mut recipes = MockRecipesService::new();

        recipes.expect_create_ingredient().never();
        recipes.expect_get_recipe().never();
        recipes
            .expect_create_recipe()
            .once()
            .return_once(|_, _| Err(RecipesServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/recipes")
            .json(&payload(IngredientUuid::new()))
            .send(&make_service(recipes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_recipe_malformed_body_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/recipes")
            .json(&json!({ "name": "Pancakes" }))
            .send(&make_service(strict_recipes_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

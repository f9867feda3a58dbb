//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::{
        recipes::{
            RecipesService, RecipesServiceError,
            data::{NewRecipe, NewRecipeIngredient},
            records::{IngredientRecord, IngredientUuid, RecipeRecord, RecipeUuid},
        },
        users::{
            UsersService, UsersServiceError,
            data::NewUser,
            records::{UserRecord, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn new_user(username: &str) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        email: format!("{username}@example.com"),
        username: username.to_string(),
        first_name: String::new(),
        last_name: String::new(),
    }
}

pub(crate) fn new_recipe(name: &str, ingredients: &[(IngredientUuid, i64)]) -> NewRecipe {
    NewRecipe {
        uuid: RecipeUuid::new(),
        name: name.to_string(),
        text: format!("How to make {name}."),
        image: String::new(),
        cooking_time: 30,
        ingredients: ingredients
            .iter()
            .map(|(ingredient_uuid, amount)| NewRecipeIngredient {
                ingredient_uuid: *ingredient_uuid,
                amount: Decimal::from(*amount),
            })
            .collect(),
    }
}

pub(crate) async fn create_user(
    ctx: &TestContext,
    username: &str,
) -> Result<UserRecord, UsersServiceError> {
    ctx.users.create_user(new_user(username)).await
}

pub(crate) async fn create_ingredient(
    ctx: &TestContext,
    name: &str,
    measurement_unit: &str,
) -> Result<IngredientRecord, RecipesServiceError> {
    ctx.recipes
        .create_ingredient(IngredientRecord {
            uuid: IngredientUuid::new(),
            name: name.to_string(),
            measurement_unit: measurement_unit.to_string(),
        })
        .await
}

pub(crate) async fn create_recipe(
    ctx: &TestContext,
    name: &str,
    ingredients: &[(IngredientUuid, i64)],
) -> Result<RecipeRecord, RecipesServiceError> {
    ctx.recipes
        .create_recipe(ctx.user_uuid, new_recipe(name, ingredients))
        .await
}

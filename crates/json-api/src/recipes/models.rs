//! Recipe Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::domain::recipes::records::{
    RecipeIngredientRecord, RecipePage, RecipeRecord, RecipeSummary,
};

/// Ingredient quantity within a recipe
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeIngredientResponse {
    /// Ingredient UUID
    pub id: Uuid,

    /// Ingredient name
    pub name: String,

    /// Unit the amount is measured in
    pub measurement_unit: String,

    /// Amount, without trailing zeros
    pub amount: String,
}

impl From<RecipeIngredientRecord> for RecipeIngredientResponse {
    fn from(ingredient: RecipeIngredientRecord) -> Self {
        Self {
            id: ingredient.ingredient_uuid.into(),
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
            amount: display_amount(ingredient.amount),
        }
    }
}

/// Full recipe, as seen by the caller
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeResponse {
    /// Recipe UUID
    pub id: Uuid,

    /// Author's user UUID
    pub author: Uuid,

    pub name: String,

    pub text: String,

    /// Image location
    pub image: String,

    /// Cooking time in minutes
    pub cooking_time: u32,

    /// Ingredients in the order they were written
    pub ingredients: Vec<RecipeIngredientResponse>,

    /// Whether the caller has favorited the recipe
    pub is_favorited: bool,

    /// Whether the recipe is in the caller's shopping cart
    pub is_in_shopping_cart: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<RecipeRecord> for RecipeResponse {
    fn from(recipe: RecipeRecord) -> Self {
        Self {
            id: recipe.uuid.into(),
            author: recipe.author_uuid.into(),
            name: recipe.name,
            text: recipe.text,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            is_favorited: recipe.is_favorited,
            is_in_shopping_cart: recipe.is_in_shopping_cart,
            created_at: recipe.created_at.to_string(),
            updated_at: recipe.updated_at.to_string(),
        }
    }
}

/// One page of recipes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeListResponse {
    /// Recipes matching the filters, across all pages
    pub count: u64,

    pub results: Vec<RecipeResponse>,
}

impl From<RecipePage> for RecipeListResponse {
    fn from(page: RecipePage) -> Self {
        Self {
            count: page.total,
            results: page.recipes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Short recipe representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeSummaryResponse {
    /// Recipe UUID
    pub id: Uuid,

    pub name: String,

    /// Image location
    pub image: String,

    /// Cooking time in minutes
    pub cooking_time: u32,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            id: summary.uuid.into(),
            name: summary.name,
            image: summary.image,
            cooking_time: summary.cooking_time,
        }
    }
}

fn display_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

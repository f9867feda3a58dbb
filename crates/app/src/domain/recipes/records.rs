//! Recipe Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Recipe UUID
pub type RecipeUuid = TypedUuid<RecipeRecord>;

/// Ingredient UUID
pub type IngredientUuid = TypedUuid<IngredientRecord>;

/// Ingredient Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRecord {
    pub uuid: IngredientUuid,
    pub name: String,
    pub measurement_unit: String,
}

/// Ingredient quantity used by a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredientRecord {
    pub ingredient_uuid: IngredientUuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: Decimal,
}

/// Recipe Record, as seen by a particular user.
#[derive(Debug, Clone)]
pub struct RecipeRecord {
    pub uuid: RecipeUuid,
    pub author_uuid: UserUuid,
    pub name: String,
    pub text: String,
    pub image: String,
    pub cooking_time: u32,
    pub ingredients: Vec<RecipeIngredientRecord>,

    /// Whether the viewing user has favorited this recipe.
    pub is_favorited: bool,

    /// Whether this recipe is in the viewing user's shopping cart.
    pub is_in_shopping_cart: bool,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Short form of a recipe returned by cart and favorite operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub uuid: RecipeUuid,
    pub name: String,
    pub image: String,
    pub cooking_time: u32,
}

/// One page of a recipe listing.
#[derive(Debug, Clone)]
pub struct RecipePage {
    /// Recipes matching the filter across all pages.
    pub total: u64,

    pub recipes: Vec<RecipeRecord>,
}

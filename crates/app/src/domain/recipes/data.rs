//! Recipes Data

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::domain::{
    recipes::records::{IngredientUuid, RecipeUuid},
    users::records::UserUuid,
};

/// New Recipe Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub uuid: RecipeUuid,
    pub name: String,
    pub text: String,
    pub image: String,
    pub cooking_time: u32,
    pub ingredients: SmallVec<[NewRecipeIngredient; 8]>,
}

/// Quantity of an existing ingredient used by a new recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRecipeIngredient {
    pub ingredient_uuid: IngredientUuid,
    pub amount: Decimal,
}

/// Replacement content for an existing recipe. Ingredients are replaced as a
/// whole.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeUpdate {
    pub name: String,
    pub text: String,
    pub image: String,
    pub cooking_time: u32,
    pub ingredients: SmallVec<[NewRecipeIngredient; 8]>,
}

/// Restricts which recipes a listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Only recipes written by this user.
    pub author: Option<UserUuid>,

    /// Only recipes the viewer has favorited.
    pub is_favorited: bool,

    /// Only recipes in the viewer's shopping cart.
    pub is_in_shopping_cart: bool,
}

/// Default number of recipes per page.
pub const DEFAULT_PAGE_LIMIT: u32 = 6;

/// Largest accepted page size.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// One-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Page `page` holding up to `limit` items. Both are clamped to at least
    /// one, and `limit` to [`MAX_PAGE_LIMIT`].
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_LIMIT)
    }
}

//! Recipe Validation

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::domain::recipes::{
    data::{NewRecipe, NewRecipeIngredient, RecipeUpdate},
    records::IngredientUuid,
};

/// Longest accepted recipe name, in characters.
pub const MAX_RECIPE_NAME_CHARS: usize = 200;

/// Shortest accepted cooking time, in minutes.
pub const MIN_COOKING_TIME: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeValidationError {
    #[error("recipe name cannot be empty")]
    EmptyName,

    #[error("recipe name cannot be longer than {MAX_RECIPE_NAME_CHARS} characters")]
    NameTooLong,

    #[error("cooking time must be at least {MIN_COOKING_TIME} minute")]
    CookingTimeTooShort,

    #[error("recipe needs at least one ingredient")]
    NoIngredients,

    #[error("ingredient {0} is listed more than once")]
    DuplicateIngredient(IngredientUuid),

    #[error("amount of ingredient {0} must be at least 1")]
    AmountTooSmall(IngredientUuid),
}

/// Check a new recipe before it is written.
///
/// # Errors
///
/// Returns the first [`RecipeValidationError`] found.
pub fn validate_new_recipe(recipe: &NewRecipe) -> Result<(), RecipeValidationError> {
    validate_content(&recipe.name, recipe.cooking_time, &recipe.ingredients)
}

/// Check replacement content for an existing recipe.
///
/// # Errors
///
/// Returns the first [`RecipeValidationError`] found.
pub fn validate_recipe_update(update: &RecipeUpdate) -> Result<(), RecipeValidationError> {
    validate_content(&update.name, update.cooking_time, &update.ingredients)
}

fn validate_content(
    name: &str,
    cooking_time: u32,
    ingredients: &[NewRecipeIngredient],
) -> Result<(), RecipeValidationError> {
    if name.trim().is_empty() {
        return Err(RecipeValidationError::EmptyName);
    }

    if name.chars().count() > MAX_RECIPE_NAME_CHARS {
        return Err(RecipeValidationError::NameTooLong);
    }

    if cooking_time < MIN_COOKING_TIME {
        return Err(RecipeValidationError::CookingTimeTooShort);
    }

    if ingredients.is_empty() {
        return Err(RecipeValidationError::NoIngredients);
    }

    let mut seen: FxHashSet<IngredientUuid> = FxHashSet::default();

    for ingredient in ingredients {
        if !seen.insert(ingredient.ingredient_uuid) {
            return Err(RecipeValidationError::DuplicateIngredient(
                ingredient.ingredient_uuid,
            ));
        }

        if ingredient.amount < Decimal::ONE {
            return Err(RecipeValidationError::AmountTooSmall(
                ingredient.ingredient_uuid,
            ));
        }
    }

    Ok(())
}

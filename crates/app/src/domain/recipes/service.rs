//! Recipes service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        recipes::{
            data::{NewRecipe, PageRequest, RecipeFilter, RecipeUpdate},
            errors::RecipesServiceError,
            records::{IngredientRecord, RecipePage, RecipeRecord, RecipeUuid},
            repository::PgRecipesRepository,
            validation::{validate_new_recipe, validate_recipe_update},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgRecipesService {
    db: Db,
    repository: PgRecipesRepository,
}

impl PgRecipesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRecipesRepository::new(),
        }
    }

    /// Lock `recipe` and check that `author` wrote it.
    async fn lock_as_author(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        author: UserUuid,
    ) -> Result<(), RecipesServiceError> {
        let owner = self.repository.lock_recipe_author(tx, recipe).await?;

        if owner != author {
            return Err(RecipesServiceError::NotAuthor);
        }

        Ok(())
    }
}

#[async_trait]
impl RecipesService for PgRecipesService {
    async fn create_ingredient(
        &self,
        ingredient: IngredientRecord,
    ) -> Result<IngredientRecord, RecipesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_ingredient(&mut tx, ingredient).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn create_recipe(
        &self,
        author: UserUuid,
        recipe: NewRecipe,
    ) -> Result<RecipeRecord, RecipesServiceError> {
        validate_new_recipe(&recipe)?;

        let mut tx = self.db.begin().await?;

        self.repository
            .create_recipe(&mut tx, author, &recipe)
            .await?;

        let created = self
            .repository
            .get_recipe(&mut tx, recipe.uuid, author)
            .await?;

        tx.commit().await?;

        debug!(
            recipe = %created.uuid,
            author = %author,
            ingredients = created.ingredients.len(),
            "created recipe"
        );

        Ok(created)
    }

    async fn get_recipe(
        &self,
        viewer: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeRecord, RecipesServiceError> {
        let mut tx = self.db.begin_read_only().await?;

        let record = self.repository.get_recipe(&mut tx, recipe, viewer).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_recipes(
        &self,
        viewer: UserUuid,
        filter: RecipeFilter,
        page: PageRequest,
    ) -> Result<RecipePage, RecipesServiceError> {
        let mut tx = self.db.begin_read_only().await?;

        let total = self.repository.count_recipes(&mut tx, viewer, filter).await?;
        let recipes = self
            .repository
            .list_recipes(&mut tx, viewer, filter, page)
            .await?;

        tx.commit().await?;

        Ok(RecipePage { total, recipes })
    }

    async fn update_recipe(
        &self,
        author: UserUuid,
        recipe: RecipeUuid,
        update: RecipeUpdate,
    ) -> Result<RecipeRecord, RecipesServiceError> {
        validate_recipe_update(&update)?;

        let mut tx = self.db.begin().await?;

        self.lock_as_author(&mut tx, recipe, author).await?;
        self.repository.update_recipe(&mut tx, recipe, &update).await?;

        let updated = self.repository.get_recipe(&mut tx, recipe, author).await?;

        tx.commit().await?;

        debug!(
            recipe = %recipe,
            author = %author,
            ingredients = updated.ingredients.len(),
            "updated recipe"
        );

        Ok(updated)
    }

    async fn delete_recipe(
        &self,
        author: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), RecipesServiceError> {
        let mut tx = self.db.begin().await?;

        self.lock_as_author(&mut tx, recipe, author).await?;

        if self.repository.delete_recipe(&mut tx, recipe).await? == 0 {
            return Err(RecipesServiceError::NotFound);
        }

        tx.commit().await?;

        debug!(recipe = %recipe, author = %author, "deleted recipe");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait RecipesService: Send + Sync {
    /// Adds an ingredient to the catalogue.
    async fn create_ingredient(
        &self,
        ingredient: IngredientRecord,
    ) -> Result<IngredientRecord, RecipesServiceError>;

    /// Validates and stores a new recipe written by `author`.
    async fn create_recipe(
        &self,
        author: UserUuid,
        recipe: NewRecipe,
    ) -> Result<RecipeRecord, RecipesServiceError>;

    /// Retrieve a single recipe as seen by `viewer`.
    async fn get_recipe(
        &self,
        viewer: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeRecord, RecipesServiceError>;

    /// List recipes matching `filter`, newest first, as seen by `viewer`.
    async fn list_recipes(
        &self,
        viewer: UserUuid,
        filter: RecipeFilter,
        page: PageRequest,
    ) -> Result<RecipePage, RecipesServiceError>;

    /// Replace a recipe's content and ingredients. Only its author may do so.
    async fn update_recipe(
        &self,
        author: UserUuid,
        recipe: RecipeUuid,
        update: RecipeUpdate,
    ) -> Result<RecipeRecord, RecipesServiceError>;

    /// Delete a recipe. Only its author may do so.
    async fn delete_recipe(
        &self,
        author: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), RecipesServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use smallvec::smallvec;
    use testresult::TestResult;

    use super::*;
    use crate::{
        domain::{
            favorites::FavoritesService,
            recipes::{
                data::NewRecipeIngredient, records::IngredientUuid,
                validation::RecipeValidationError,
            },
            shopping_cart::ShoppingCartService,
        },
        test::{
            TestContext,
            helpers::{create_ingredient, create_recipe, create_user, new_recipe},
        },
    };

    fn update(name: &str, ingredients: &[(IngredientUuid, i64)]) -> RecipeUpdate {
        let recipe = new_recipe(name, ingredients);

        RecipeUpdate {
            name: recipe.name,
            text: recipe.text,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients,
        }
    }

    fn names(page: &RecipePage) -> Vec<&str> {
        page.recipes.iter().map(|recipe| recipe.name.as_str()).collect()
    }

    #[tokio::test]
    async fn create_recipe_returns_ingredients_in_given_order() -> TestResult {
        let ctx = TestContext::new().await;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;
        let milk = create_ingredient(&ctx, "Milk", "ml").await?;

        let recipe = ctx
            .recipes
            .create_recipe(
                ctx.user_uuid,
                new_recipe("Pancakes", &[(flour.uuid, 200), (milk.uuid, 300)]),
            )
            .await?;

        let names: Vec<&str> = recipe
            .ingredients
            .iter()
            .map(|ingredient| ingredient.name.as_str())
            .collect();

        assert_eq!(recipe.author_uuid, ctx.user_uuid);
        assert_eq!(names, vec!["Flour", "Milk"]);
        assert_eq!(
            recipe.ingredients.first().map(|ingredient| ingredient.amount.normalize()),
            Some(Decimal::from(200))
        );
        assert!(!recipe.is_favorited);
        assert!(!recipe.is_in_shopping_cart);

        Ok(())
    }

    #[tokio::test]
    async fn create_recipe_rejects_unknown_ingredient() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .recipes
            .create_recipe(
                ctx.user_uuid,
                new_recipe("Mystery", &[(IngredientUuid::new(), 1)]),
            )
            .await;

        assert!(
            matches!(result, Err(RecipesServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_recipe_validates_before_writing() -> TestResult {
        let ctx = TestContext::new().await;
        let salt = create_ingredient(&ctx, "Salt", "g").await?;

        let recipe = NewRecipe {
            ingredients: smallvec![NewRecipeIngredient {
                ingredient_uuid: salt.uuid,
                amount: Decimal::ZERO,
            }],
            ..new_recipe("Salted", &[])
        };

        let result = ctx.recipes.create_recipe(ctx.user_uuid, recipe.clone()).await;

        assert!(matches!(
            result,
            Err(RecipesServiceError::Invalid(
                RecipeValidationError::AmountTooSmall(_)
            ))
        ));

        let lookup = ctx.recipes.get_recipe(ctx.user_uuid, recipe.uuid).await;

        assert!(matches!(lookup, Err(RecipesServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn get_recipe_returns_not_found_for_unknown_recipe() {
        let ctx = TestContext::new().await;

        let result = ctx.recipes.get_recipe(ctx.user_uuid, RecipeUuid::new()).await;

        assert!(matches!(result, Err(RecipesServiceError::NotFound)));
    }

    #[tokio::test]
    async fn duplicate_ingredient_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        create_ingredient(&ctx, "Sugar", "g").await?;

        let result = ctx
            .recipes
            .create_ingredient(IngredientRecord {
                uuid: IngredientUuid::new(),
                name: "Sugar".to_string(),
                measurement_unit: "g".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RecipesServiceError::AlreadyExists)));

        Ok(())
    }

    #[tokio::test]
    async fn list_recipes_pages_newest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;

        for name in ["Bread", "Cake", "Pie"] {
            create_recipe(&ctx, name, &[(flour.uuid, 100)]).await?;
        }

        let first = ctx
            .recipes
            .list_recipes(ctx.user_uuid, RecipeFilter::default(), PageRequest::new(1, 2))
            .await?;

        let second = ctx
            .recipes
            .list_recipes(ctx.user_uuid, RecipeFilter::default(), PageRequest::new(2, 2))
            .await?;

        assert_eq!(first.total, 3);
        assert_eq!(names(&first), vec!["Pie", "Cake"]);
        assert_eq!(second.total, 3);
        assert_eq!(names(&second), vec!["Bread"]);
        assert_eq!(
            second.recipes.first().map(|recipe| recipe.ingredients.len()),
            Some(1)
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_recipes_filters_by_viewer_flags_and_author() -> TestResult {
        let ctx = TestContext::new().await;
        let other = create_user(&ctx, "other").await?;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;

        let bread = create_recipe(&ctx, "Bread", &[(flour.uuid, 100)]).await?;
        let cake = create_recipe(&ctx, "Cake", &[(flour.uuid, 200)]).await?;

        ctx.recipes
            .create_recipe(other.uuid, new_recipe("Pie", &[(flour.uuid, 300)]))
            .await?;

        ctx.favorites.add_favorite(ctx.user_uuid, bread.uuid).await?;
        ctx.shopping_cart.add_recipe(ctx.user_uuid, cake.uuid).await?;

        let list = |filter: RecipeFilter| {
            ctx.recipes
                .list_recipes(ctx.user_uuid, filter, PageRequest::default())
        };

        let favorited = list(RecipeFilter {
            is_favorited: true,
            ..RecipeFilter::default()
        })
        .await?;

        let in_cart = list(RecipeFilter {
            is_in_shopping_cart: true,
            ..RecipeFilter::default()
        })
        .await?;

        let by_other = list(RecipeFilter {
            author: Some(other.uuid),
            ..RecipeFilter::default()
        })
        .await?;

        assert_eq!(names(&favorited), vec!["Bread"]);
        assert!(
            favorited.recipes.iter().all(|recipe| recipe.is_favorited),
            "favorited listing should carry the viewer's flag"
        );
        assert_eq!(names(&in_cart), vec!["Cake"]);
        assert_eq!(names(&by_other), vec!["Pie"]);
        assert_eq!(by_other.total, 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_recipe_replaces_ingredients() -> TestResult {
        let ctx = TestContext::new().await;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;
        let milk = create_ingredient(&ctx, "Milk", "ml").await?;

        let recipe = create_recipe(&ctx, "Pancakes", &[(flour.uuid, 200)]).await?;

        let updated = ctx
            .recipes
            .update_recipe(
                ctx.user_uuid,
                recipe.uuid,
                update("Crepes", &[(milk.uuid, 300), (flour.uuid, 100)]),
            )
            .await?;

        let ingredients: Vec<(&str, Decimal)> = updated
            .ingredients
            .iter()
            .map(|ingredient| (ingredient.name.as_str(), ingredient.amount.normalize()))
            .collect();

        assert_eq!(updated.name, "Crepes");
        assert_eq!(
            ingredients,
            vec![("Milk", Decimal::from(300)), ("Flour", Decimal::from(100))]
        );

        Ok(())
    }

    #[tokio::test]
    async fn only_the_author_may_update_or_delete() -> TestResult {
        let ctx = TestContext::new().await;
        let other = create_user(&ctx, "other").await?;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;

        let recipe = create_recipe(&ctx, "Bread", &[(flour.uuid, 500)]).await?;

        let updated = ctx
            .recipes
            .update_recipe(other.uuid, recipe.uuid, update("Stolen", &[(flour.uuid, 1)]))
            .await;

        let deleted = ctx.recipes.delete_recipe(other.uuid, recipe.uuid).await;

        assert!(
            matches!(updated, Err(RecipesServiceError::NotAuthor)),
            "expected NotAuthor, got {updated:?}"
        );
        assert!(
            matches!(deleted, Err(RecipesServiceError::NotAuthor)),
            "expected NotAuthor, got {deleted:?}"
        );

        let unchanged = ctx.recipes.get_recipe(ctx.user_uuid, recipe.uuid).await?;

        assert_eq!(unchanged.name, "Bread");

        Ok(())
    }

    #[tokio::test]
    async fn invalid_update_leaves_recipe_unchanged() -> TestResult {
        let ctx = TestContext::new().await;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;

        let recipe = create_recipe(&ctx, "Bread", &[(flour.uuid, 500)]).await?;

        let result = ctx
            .recipes
            .update_recipe(ctx.user_uuid, recipe.uuid, update("Bread", &[]))
            .await;

        assert!(matches!(
            result,
            Err(RecipesServiceError::Invalid(RecipeValidationError::NoIngredients))
        ));

        let unchanged = ctx.recipes.get_recipe(ctx.user_uuid, recipe.uuid).await?;

        assert_eq!(unchanged.ingredients.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn delete_recipe_removes_it_from_carts() -> TestResult {
        let ctx = TestContext::new().await;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;

        let recipe = create_recipe(&ctx, "Bread", &[(flour.uuid, 500)]).await?;

        ctx.shopping_cart.add_recipe(ctx.user_uuid, recipe.uuid).await?;
        ctx.recipes.delete_recipe(ctx.user_uuid, recipe.uuid).await?;

        let lookup = ctx.recipes.get_recipe(ctx.user_uuid, recipe.uuid).await;

        assert!(matches!(lookup, Err(RecipesServiceError::NotFound)));
        assert!(ctx.shopping_cart.cart_lines(ctx.user_uuid).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn deleting_unknown_recipe_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .recipes
            .delete_recipe(ctx.user_uuid, RecipeUuid::new())
            .await;

        assert!(matches!(result, Err(RecipesServiceError::NotFound)));
    }
}

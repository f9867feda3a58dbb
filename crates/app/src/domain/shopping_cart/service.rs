//! Shopping cart service.

use async_trait::async_trait;
use mockall::automock;
use pantry::lines::CartLineItem;

use crate::{
    database::Db,
    domain::{
        recipes::{
            records::{RecipeSummary, RecipeUuid},
            repository::PgRecipesRepository,
        },
        shopping_cart::{errors::ShoppingCartServiceError, repository::PgShoppingCartRepository},
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgShoppingCartService {
    db: Db,
    repository: PgShoppingCartRepository,
    recipes: PgRecipesRepository,
}

impl PgShoppingCartService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgShoppingCartRepository::new(),
            recipes: PgRecipesRepository::new(),
        }
    }
}

#[async_trait]
impl ShoppingCartService for PgShoppingCartService {
    async fn add_recipe(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, ShoppingCartServiceError> {
        let mut tx = self.db.begin().await?;

        let summary = self.recipes.get_recipe_summary(&mut tx, recipe).await?;

        let rows_affected = self.repository.add_recipe(&mut tx, user, recipe).await?;

        if rows_affected == 0 {
            return Err(ShoppingCartServiceError::AlreadyInCart);
        }

        tx.commit().await?;

        Ok(summary)
    }

    async fn remove_recipe(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), ShoppingCartServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.remove_recipe(&mut tx, user, recipe).await?;

        if rows_affected == 0 {
            return Err(ShoppingCartServiceError::NotInCart);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn cart_lines(&self, user: UserUuid) -> Result<Vec<CartLineItem>, ShoppingCartServiceError> {
        let mut tx = self.db.begin_read_only().await?;

        let lines = self.repository.list_cart_lines(&mut tx, user).await?;

        tx.commit().await?;

        Ok(lines)
    }
}

#[automock]
#[async_trait]
pub trait ShoppingCartService: Send + Sync {
    /// Adds a recipe to the user's shopping cart.
    async fn add_recipe(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, ShoppingCartServiceError>;

    /// Removes a recipe from the user's shopping cart.
    async fn remove_recipe(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), ShoppingCartServiceError>;

    /// Every ingredient quantity of every recipe in the user's shopping cart.
    ///
    /// Lines are not merged; a recipe contributes one line per ingredient.
    async fn cart_lines(&self, user: UserUuid) -> Result<Vec<CartLineItem>, ShoppingCartServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{create_ingredient, create_recipe, create_user},
    };

    use super::*;

    #[tokio::test]
    async fn add_recipe_returns_summary() -> TestResult {
        let ctx = TestContext::new().await;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;
        let recipe = create_recipe(&ctx, "Bread", &[(flour.uuid, 500)]).await?;

        let summary = ctx.shopping_cart.add_recipe(ctx.user_uuid, recipe.uuid).await?;

        assert_eq!(summary.uuid, recipe.uuid);
        assert_eq!(summary.name, "Bread");
        assert_eq!(summary.cooking_time, recipe.cooking_time);

        let viewed = ctx.recipes.get_recipe(ctx.user_uuid, recipe.uuid).await?;

        assert!(viewed.is_in_shopping_cart);

        Ok(())
    }

    #[tokio::test]
    async fn adding_recipe_twice_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;
        let recipe = create_recipe(&ctx, "Bread", &[(flour.uuid, 500)]).await?;

        ctx.shopping_cart.add_recipe(ctx.user_uuid, recipe.uuid).await?;

        let result = ctx.shopping_cart.add_recipe(ctx.user_uuid, recipe.uuid).await;

        assert!(matches!(result, Err(ShoppingCartServiceError::AlreadyInCart)));

        Ok(())
    }

    #[tokio::test]
    async fn adding_unknown_recipe_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .shopping_cart
            .add_recipe(ctx.user_uuid, RecipeUuid::new())
            .await;

        assert!(matches!(result, Err(ShoppingCartServiceError::RecipeNotFound)));
    }

    #[tokio::test]
    async fn remove_recipe_not_in_cart_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;
        let recipe = create_recipe(&ctx, "Bread", &[(flour.uuid, 500)]).await?;

        ctx.shopping_cart.add_recipe(ctx.user_uuid, recipe.uuid).await?;
        ctx.shopping_cart.remove_recipe(ctx.user_uuid, recipe.uuid).await?;

        let result = ctx
            .shopping_cart
            .remove_recipe(ctx.user_uuid, recipe.uuid)
            .await;

        assert!(matches!(result, Err(ShoppingCartServiceError::NotInCart)));

        Ok(())
    }

    #[tokio::test]
    async fn cart_lines_lists_every_recipe_ingredient() -> TestResult {
        let ctx = TestContext::new().await;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;
        let sugar = create_ingredient(&ctx, "Sugar", "g").await?;

        let bread = create_recipe(&ctx, "Bread", &[(flour.uuid, 200), (sugar.uuid, 100)]).await?;
        let cake = create_recipe(&ctx, "Cake", &[(flour.uuid, 300)]).await?;

        ctx.shopping_cart.add_recipe(ctx.user_uuid, bread.uuid).await?;
        ctx.shopping_cart.add_recipe(ctx.user_uuid, cake.uuid).await?;

        let lines = ctx.shopping_cart.cart_lines(ctx.user_uuid).await?;

        let total_flour: Decimal = lines
            .iter()
            .filter(|line| line.ingredient_name == "Flour")
            .map(|line| line.amount)
            .sum();

        assert_eq!(lines.len(), 3);
        assert_eq!(total_flour, Decimal::from(500));

        Ok(())
    }

    #[tokio::test]
    async fn cart_lines_only_include_the_users_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let other = create_user(&ctx, "other").await?;
        let flour = create_ingredient(&ctx, "Flour", "g").await?;
        let recipe = create_recipe(&ctx, "Bread", &[(flour.uuid, 500)]).await?;

        ctx.shopping_cart.add_recipe(other.uuid, recipe.uuid).await?;

        assert!(ctx.shopping_cart.cart_lines(ctx.user_uuid).await?.is_empty());
        assert_eq!(ctx.shopping_cart.cart_lines(other.uuid).await?.len(), 1);

        Ok(())
    }
}

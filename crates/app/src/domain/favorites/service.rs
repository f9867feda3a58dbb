//! Favorites service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        favorites::{errors::FavoritesServiceError, repository::PgFavoritesRepository},
        recipes::{
            records::{RecipeSummary, RecipeUuid},
            repository::PgRecipesRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgFavoritesService {
    db: Db,
    repository: PgFavoritesRepository,
    recipes: PgRecipesRepository,
}

impl PgFavoritesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFavoritesRepository::new(),
            recipes: PgRecipesRepository::new(),
        }
    }
}

#[async_trait]
impl FavoritesService for PgFavoritesService {
    async fn add_favorite(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, FavoritesServiceError> {
        let mut tx = self.db.begin().await?;

        let summary = self.recipes.get_recipe_summary(&mut tx, recipe).await?;

        if self.repository.add_favorite(&mut tx, user, recipe).await? == 0 {
            return Err(FavoritesServiceError::AlreadyFavorited);
        }

        tx.commit().await?;

        Ok(summary)
    }

    async fn remove_favorite(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), FavoritesServiceError> {
        let mut tx = self.db.begin().await?;

        if self.repository.remove_favorite(&mut tx, user, recipe).await? == 0 {
            return Err(FavoritesServiceError::NotFavorited);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait FavoritesService: Send + Sync {
    /// Marks a recipe as one of the user's favorites.
    async fn add_favorite(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, FavoritesServiceError>;

    /// Removes a recipe from the user's favorites.
    async fn remove_favorite(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), FavoritesServiceError>;
}

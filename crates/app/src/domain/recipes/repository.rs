//! Recipes Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    recipes::{
        data::{NewRecipe, NewRecipeIngredient, PageRequest, RecipeFilter, RecipeUpdate},
        records::{
            IngredientRecord, IngredientUuid, RecipeIngredientRecord, RecipeRecord, RecipeSummary,
            RecipeUuid,
        },
    },
    users::records::UserUuid,
};

const CREATE_RECIPE_SQL: &str = include_str!("sql/create_recipe.sql");
const CREATE_RECIPE_INGREDIENT_SQL: &str = include_str!("sql/create_recipe_ingredient.sql");
const CREATE_INGREDIENT_SQL: &str = include_str!("sql/create_ingredient.sql");
const GET_RECIPE_SQL: &str = include_str!("sql/get_recipe.sql");
const GET_RECIPE_INGREDIENTS_SQL: &str = include_str!("sql/get_recipe_ingredients.sql");
const GET_RECIPE_SUMMARY_SQL: &str = include_str!("sql/get_recipe_summary.sql");
const LIST_RECIPES_SQL: &str = include_str!("sql/list_recipes.sql");
const COUNT_RECIPES_SQL: &str = include_str!("sql/count_recipes.sql");
const LOCK_RECIPE_AUTHOR_SQL: &str = include_str!("sql/lock_recipe_author.sql");
const UPDATE_RECIPE_SQL: &str = include_str!("sql/update_recipe.sql");
const DELETE_RECIPE_INGREDIENTS_SQL: &str = include_str!("sql/delete_recipe_ingredients.sql");
const DELETE_RECIPE_SQL: &str = include_str!("sql/delete_recipe.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRecipesRepository;

impl PgRecipesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_ingredient(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ingredient: IngredientRecord,
    ) -> Result<IngredientRecord, sqlx::Error> {
        query_as::<Postgres, IngredientRecord>(CREATE_INGREDIENT_SQL)
            .bind(ingredient.uuid.into_uuid())
            .bind(ingredient.name)
            .bind(ingredient.measurement_unit)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        author: UserUuid,
        recipe: &NewRecipe,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_RECIPE_SQL)
            .bind(recipe.uuid.into_uuid())
            .bind(author.into_uuid())
            .bind(&recipe.name)
            .bind(&recipe.text)
            .bind(&recipe.image)
            .bind(encode_cooking_time(recipe.cooking_time)?)
            .execute(&mut **tx)
            .await?;

        self.insert_ingredients(tx, recipe.uuid, &recipe.ingredients)
            .await
    }

    /// Lock a recipe row for the rest of the transaction and return its author.
    pub(crate) async fn lock_recipe_author(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<UserUuid, sqlx::Error> {
        let row = query(LOCK_RECIPE_AUTHOR_SQL)
            .bind(recipe.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(UserUuid::from_uuid(row.try_get("author_uuid")?))
    }

    pub(crate) async fn update_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        update: &RecipeUpdate,
    ) -> Result<(), sqlx::Error> {
        query(UPDATE_RECIPE_SQL)
            .bind(recipe.into_uuid())
            .bind(&update.name)
            .bind(&update.text)
            .bind(&update.image)
            .bind(encode_cooking_time(update.cooking_time)?)
            .execute(&mut **tx)
            .await?;

        query(DELETE_RECIPE_INGREDIENTS_SQL)
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?;

        self.insert_ingredients(tx, recipe, &update.ingredients)
            .await
    }

    pub(crate) async fn delete_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        let result = query(DELETE_RECIPE_SQL)
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_ingredients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        ingredients: &[NewRecipeIngredient],
    ) -> Result<(), sqlx::Error> {
        for (position, ingredient) in ingredients.iter().enumerate() {
            let position = i32::try_from(position).map_err(|e| sqlx::Error::ColumnDecode {
                index: "position".to_string(),
                source: Box::new(e),
            })?;

            query(CREATE_RECIPE_INGREDIENT_SQL)
                .bind(recipe.into_uuid())
                .bind(ingredient.ingredient_uuid.into_uuid())
                .bind(ingredient.amount)
                .bind(position)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    pub(crate) async fn count_recipes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: UserUuid,
        filter: RecipeFilter,
    ) -> Result<u64, sqlx::Error> {
        let row = query(COUNT_RECIPES_SQL)
            .bind(viewer.into_uuid())
            .bind(filter.author.map(UserUuid::into_uuid))
            .bind(filter.is_favorited)
            .bind(filter.is_in_shopping_cart)
            .fetch_one(&mut **tx)
            .await?;

        let total: i64 = row.try_get("total")?;

        u64::try_from(total).map_err(|e| sqlx::Error::ColumnDecode {
            index: "total".to_string(),
            source: Box::new(e),
        })
    }

    /// One page of recipes, newest first, each with its ingredients.
    pub(crate) async fn list_recipes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: UserUuid,
        filter: RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<RecipeRecord>, sqlx::Error> {
        let offset = i64::try_from(page.offset()).map_err(|e| sqlx::Error::ColumnDecode {
            index: "offset".to_string(),
            source: Box::new(e),
        })?;

        let mut recipes = query_as::<Postgres, RecipeRecord>(LIST_RECIPES_SQL)
            .bind(viewer.into_uuid())
            .bind(filter.author.map(UserUuid::into_uuid))
            .bind(filter.is_favorited)
            .bind(filter.is_in_shopping_cart)
            .bind(i64::from(page.limit()))
            .bind(offset)
            .fetch_all(&mut **tx)
            .await?;

        for recipe in &mut recipes {
            recipe.ingredients = self.get_recipe_ingredients(tx, recipe.uuid).await?;
        }

        Ok(recipes)
    }

    pub(crate) async fn get_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        viewer: UserUuid,
    ) -> Result<RecipeRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, RecipeRecord>(GET_RECIPE_SQL)
            .bind(recipe.into_uuid())
            .bind(viewer.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        record.ingredients = self.get_recipe_ingredients(tx, recipe).await?;

        Ok(record)
    }

    async fn get_recipe_ingredients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<Vec<RecipeIngredientRecord>, sqlx::Error> {
        query_as::<Postgres, RecipeIngredientRecord>(GET_RECIPE_INGREDIENTS_SQL)
            .bind(recipe.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_recipe_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, sqlx::Error> {
        query_as::<Postgres, RecipeSummary>(GET_RECIPE_SUMMARY_SQL)
            .bind(recipe.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

fn encode_cooking_time(cooking_time: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(cooking_time).map_err(|e| sqlx::Error::ColumnDecode {
        index: "cooking_time".to_string(),
        source: Box::new(e),
    })
}

fn decode_cooking_time(row: &PgRow) -> sqlx::Result<u32> {
    let cooking_time: i32 = row.try_get("cooking_time")?;

    u32::try_from(cooking_time).map_err(|e| sqlx::Error::ColumnDecode {
        index: "cooking_time".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for IngredientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: IngredientUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            measurement_unit: row.try_get("measurement_unit")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for RecipeIngredientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            ingredient_uuid: IngredientUuid::from_uuid(row.try_get("ingredient_uuid")?),
            name: row.try_get("name")?,
            measurement_unit: row.try_get("measurement_unit")?,
            amount: row.try_get("amount")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for RecipeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RecipeUuid::from_uuid(row.try_get("uuid")?),
            author_uuid: UserUuid::from_uuid(row.try_get("author_uuid")?),
            name: row.try_get("name")?,
            text: row.try_get("text")?,
            image: row.try_get("image")?,
            cooking_time: decode_cooking_time(row)?,
            ingredients: Vec::new(),
            is_favorited: row.try_get("is_favorited")?,
            is_in_shopping_cart: row.try_get("is_in_shopping_cart")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for RecipeSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RecipeUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            image: row.try_get("image")?,
            cooking_time: decode_cooking_time(row)?,
        })
    }
}

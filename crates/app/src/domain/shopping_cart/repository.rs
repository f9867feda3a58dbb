//! Shopping Cart Repository

use pantry::lines::CartLineItem;
use sqlx::{Postgres, Row, Transaction, postgres::PgRow, query};

use crate::domain::{recipes::records::RecipeUuid, users::records::UserUuid};

const ADD_RECIPE_SQL: &str = include_str!("sql/add_recipe.sql");
const REMOVE_RECIPE_SQL: &str = include_str!("sql/remove_recipe.sql");
const LIST_CART_LINES_SQL: &str = include_str!("sql/list_cart_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgShoppingCartRepository;

impl PgShoppingCartRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Returns the number of rows inserted; zero when the recipe was already present.
    pub(crate) async fn add_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(ADD_RECIPE_SQL)
            .bind(user.into_uuid())
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn remove_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REMOVE_RECIPE_SQL)
            .bind(user.into_uuid())
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// One line per ingredient of every recipe in the cart, in the order recipes were added.
    pub(crate) async fn list_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<CartLineItem>, sqlx::Error> {
        query(LIST_CART_LINES_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await?
            .iter()
            .map(cart_line_from_row)
            .collect()
    }
}

fn cart_line_from_row(row: &PgRow) -> sqlx::Result<CartLineItem> {
    Ok(CartLineItem::new(
        row.try_get::<String, _>("ingredient_name")?,
        row.try_get::<String, _>("measurement_unit")?,
        row.try_get("amount")?,
    ))
}

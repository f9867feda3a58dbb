//! Remove Favorite Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, favorites::errors::into_status_error};

/// Remove Favorite Handler
#[endpoint(
    tags("favorites"),
    summary = "Unfavorite Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Favorite removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not a favorite"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let user = depot.user_uuid_or_401()?;

    state
        .app
        .favorites
        .remove_favorite(user, recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use pantry_app::domain::{
        favorites::{FavoritesServiceError, MockFavoritesService},
        recipes::records::RecipeUuid,
    };

    use crate::test_helpers::favorites_service;

    use super::*;

    fn make_service(favorites: MockFavoritesService) -> Service {
        favorites_service(
            favorites,
            Router::with_path("recipes/{recipe}/favorite").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_favorite_returns_204() -> TestResult {
        let uuid = RecipeUuid::new();

        let mut favorites = MockFavoritesService::new();

        favorites
            .expect_remove_favorite()
            .once()
            .return_once(|_, _| Ok(()));

        favorites.expect_add_favorite().never();

        let res = TestClient::delete(format!("http://example.com/recipes/{uuid}/favorite"))
            .send(&make_service(favorites))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_favorite_returns_404() -> TestResult {
        let uuid = RecipeUuid::new();

        let mut favorites = MockFavoritesService::new();

        favorites
            .expect_remove_favorite()
            .once()
            .return_once(|_, _| Err(FavoritesServiceError::NotFavorited));

        favorites.expect_add_favorite().never();

        let res = TestClient::delete(format!("http://example.com/recipes/{uuid}/favorite"))
            .send(&make_service(favorites))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}

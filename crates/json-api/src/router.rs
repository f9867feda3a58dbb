//! App Router

use salvo::Router;

use crate::{auth, favorites, recipes, shopping_cart};

/// Routes that require an authenticated user.
pub(crate) fn app_router() -> Router {
    Router::new().hoop(auth::middleware::handler).push(
        Router::with_path("recipes")
            .get(recipes::index::handler)
            .post(recipes::create::handler)
            .push(
                Router::with_path("download_shopping_cart")
                    .get(shopping_cart::download::handler),
            )
            .push(
                Router::with_path("{recipe}")
                    .get(recipes::get::handler)
                    .patch(recipes::update::handler)
                    .delete(recipes::delete::handler)
                    .push(
                        Router::with_path("shopping_cart")
                            .post(shopping_cart::add::handler)
                            .delete(shopping_cart::remove::handler),
                    )
                    .push(
                        Router::with_path("favorite")
                            .post(favorites::add::handler)
                            .delete(favorites::remove::handler),
                    ),
            ),
    )
}

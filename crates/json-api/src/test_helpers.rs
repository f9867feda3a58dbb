//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use pantry::receipt::{PdfReceiptRenderer, ReceiptRenderer};
use pantry_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        favorites::MockFavoritesService,
        recipes::{
            MockRecipesService,
            records::{RecipeRecord, RecipeSummary, RecipeUuid},
        },
        shopping_cart::{DEFAULT_EXPORT_FILENAME, MockShoppingCartService, ShoppingCartExporter},
        users::records::UserUuid,
    },
};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_summary(uuid: RecipeUuid) -> RecipeSummary {
    RecipeSummary {
        uuid,
        name: "Pancakes".to_string(),
        image: "recipes/images/pancakes.png".to_string(),
        cooking_time: 20,
    }
}

pub(crate) fn make_recipe(uuid: RecipeUuid) -> RecipeRecord {
    RecipeRecord {
        uuid,
        author_uuid: TEST_USER_UUID,
        name: "Pancakes".to_string(),
        text: "Whisk and fry.".to_string(),
        image: "recipes/images/pancakes.png".to_string(),
        cooking_time: 20,
        ingredients: Vec::new(),
        is_favorited: false,
        is_in_shopping_cart: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate().never();

    auth
}

pub(crate) fn strict_recipes_mock() -> MockRecipesService {
    let mut recipes = MockRecipesService::new();

    recipes.expect_create_ingredient().never();
    recipes.expect_create_recipe().never();
    recipes.expect_get_recipe().never();
    recipes.expect_list_recipes().never();
    recipes.expect_update_recipe().never();
    recipes.expect_delete_recipe().never();

    recipes
}

pub(crate) fn strict_shopping_cart_mock() -> MockShoppingCartService {
    let mut shopping_cart = MockShoppingCartService::new();

    shopping_cart.expect_add_recipe().never();
    shopping_cart.expect_remove_recipe().never();
    shopping_cart.expect_cart_lines().never();

    shopping_cart
}

pub(crate) fn strict_favorites_mock() -> MockFavoritesService {
    let mut favorites = MockFavoritesService::new();

    favorites.expect_add_favorite().never();
    favorites.expect_remove_favorite().never();

    favorites
}

/// Service mocks backing a test [`State`].
pub(crate) struct TestServices {
    pub(crate) auth: MockAuthService,
    pub(crate) recipes: MockRecipesService,
    pub(crate) shopping_cart: MockShoppingCartService,
    pub(crate) favorites: MockFavoritesService,
    pub(crate) renderer: Arc<dyn ReceiptRenderer>,
    pub(crate) export_filename: String,
}

impl Default for TestServices {
    fn default() -> Self {
        Self {
            auth: strict_auth_mock(),
            recipes: strict_recipes_mock(),
            shopping_cart: strict_shopping_cart_mock(),
            favorites: strict_favorites_mock(),
            renderer: Arc::new(PdfReceiptRenderer::default()),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl TestServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        let shopping_cart: Arc<MockShoppingCartService> = Arc::new(self.shopping_cart);

        State::from_app_context(AppContext {
            auth: Arc::new(self.auth),
            recipes: Arc::new(self.recipes),
            favorites: Arc::new(self.favorites),
            exporter: ShoppingCartExporter::new(
                shopping_cart.clone(),
                self.renderer,
                self.export_filename,
            ),
            shopping_cart,
        })
    }

    /// Serve `route` as the test user.
    pub(crate) fn into_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    TestServices {
        auth,
        ..TestServices::default()
    }
    .into_state()
}

pub(crate) fn recipes_service(recipes: MockRecipesService, route: Router) -> Service {
    TestServices {
        recipes,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn shopping_cart_service(
    shopping_cart: MockShoppingCartService,
    route: Router,
) -> Service {
    TestServices {
        shopping_cart,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn favorites_service(favorites: MockFavoritesService, route: Router) -> Service {
    TestServices {
        favorites,
        ..TestServices::default()
    }
    .into_service(route)
}

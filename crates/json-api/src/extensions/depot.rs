//! Request Depot Helpers

use std::sync::Arc;

use pantry_app::domain::users::records::UserUuid;
use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

const USER_UUID_KEY: &str = "pantry.user_uuid";

/// Typed access to what the router and auth middleware leave in the depot.
pub(crate) trait DepotExt {
    /// Application state injected at startup. Its absence is a wiring bug,
    /// so callers get a 500.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;

    fn insert_user_uuid(&mut self, user: UserUuid);

    /// Caller resolved by the auth middleware.
    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_ignored| {
            error!("application state missing from depot");

            StatusError::internal_server_error()
        })
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(USER_UUID_KEY, user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.get::<UserUuid>(USER_UUID_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}

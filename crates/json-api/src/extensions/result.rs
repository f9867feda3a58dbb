//! Response Building Helpers

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Turn a failure while assembling a response into a logged 500.
pub(crate) trait ResultExt<T> {
    /// `step` names what was being written, e.g. a header.
    fn or_500(self, step: &'static str) -> Result<T, StatusError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_500(self, step: &'static str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!(%error, step, "failed to build response");

            StatusError::internal_server_error()
        })
    }
}

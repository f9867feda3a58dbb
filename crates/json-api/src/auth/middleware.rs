//! Auth middleware.

use pantry_app::auth::AuthServiceError;
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use crate::extensions::*;

/// Authorization schemes accepted in front of an access token.
const TOKEN_SCHEMES: [&str; 2] = ["token", "bearer"];

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.state_or_500() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let user_uuid = match state.app.auth.authenticate(token).await {
        Ok(user_uuid) => user_uuid,
        Err(AuthServiceError::Rejected) => {
            res.render(StatusError::unauthorized().brief("Invalid access token"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate access token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_user_uuid(user_uuid);

    ctrl.call_next(req, depot, res).await;
}

fn extract_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    let accepted = TOKEN_SCHEMES
        .iter()
        .any(|accepted| scheme.eq_ignore_ascii_case(accepted));

    if !accepted || token.is_empty() {
        return None;
    }

    Some(token)
}

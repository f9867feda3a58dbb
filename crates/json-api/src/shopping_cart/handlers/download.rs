//! Download Shopping Cart Handler

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    prelude::*,
};
use tracing::info;

use crate::{
    extensions::*, observability::observe_receipt, shopping_cart::errors::export_status_error,
};

/// Characters allowed unescaped in an RFC 8187 `ext-value`.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// `Content-Disposition` value offering `filename` as a download.
///
/// Non-ASCII names get an ASCII fallback in `filename` and the exact name in
/// `filename*`.
fn attachment_disposition(filename: &str) -> String {
    if filename.is_ascii() {
        return format!("attachment; filename=\"{filename}\"");
    }

    let fallback: String = filename
        .chars()
        .map(|character| if character.is_ascii() { character } else { '_' })
        .collect();

    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        utf8_percent_encode(filename, ATTR_CHAR)
    )
}

/// Download Shopping Cart Handler
///
/// Returns the caller's shopping cart as a receipt listing every ingredient,
/// with quantities summed across recipes.
#[endpoint(
    tags("shopping_cart"),
    summary = "Download Shopping Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shopping cart receipt as an attachment"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let user = depot.user_uuid_or_401()?;

    let export = state
        .app
        .exporter
        .export(user)
        .await
        .map_err(export_status_error)?;

    let page_count = export.receipt.page_count();

    res.add_header(CONTENT_TYPE, export.content_type, true)
        .or_500("content type header")?
        .add_header(
            CONTENT_DISPOSITION,
            attachment_disposition(&export.filename),
            true,
        )
        .or_500("content disposition header")?;

    res.write_body(export.receipt.into_bytes())
        .or_500("receipt body")?;

    observe_receipt(page_count);

    info!(
        user = %user,
        lines = export.line_count,
        pages = page_count,
        "shopping cart downloaded"
    );

    Ok(())
}

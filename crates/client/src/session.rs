//! Compose-session glue: catalog fetch at session start.

use shoplens_orders::OrderComposer;

use crate::api::ApiClient;
use crate::error::ApiError;

/// Start an order-entry session: take a catalog snapshot and hand back a
/// composer seeded with one blank line.
///
/// The snapshot is not refreshed for the lifetime of the session; a catalog
/// change on the server is only seen by the next session. After a confirmed
/// [`ApiClient::submit_order`], callers reset or drop the composer.
pub async fn begin_compose(client: &ApiClient) -> Result<OrderComposer, ApiError> {
    let catalog = client.fetch_catalog().await?;
    Ok(OrderComposer::new(catalog))
}

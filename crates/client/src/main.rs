use anyhow::Result;

use shoplens_client::ApiClient;

/// Terminal rendition of the dashboard: health probe, analytics summary,
/// product count, all logged as structured lines.
#[tokio::main]
async fn main() -> Result<()> {
    shoplens_observability::init();

    let client = ApiClient::from_env();

    let health = client.health().await?;
    tracing::info!(message = %health.message, "api reachable");

    let summary = client.fetch_summary().await?;
    tracing::info!(
        total_orders = summary.total_orders,
        total_revenue = %summary.total_revenue,
        "analytics summary"
    );
    for bucket in &summary.revenue_by_date {
        tracing::info!(date = %bucket.date, revenue = %bucket.total_revenue, "revenue by date");
    }
    for top in &summary.top_products {
        tracing::info!(
            sku = %top.sku,
            quantity = top.total_quantity,
            revenue = %top.total_revenue,
            "top product"
        );
    }

    let products = client.fetch_products().await?;
    tracing::info!(count = products.len(), "products loaded");

    Ok(())
}

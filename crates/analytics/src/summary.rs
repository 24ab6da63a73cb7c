use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shoplens_catalog::Catalog;
use shoplens_core::{Money, Sku};
use shoplens_orders::OrderRecord;

/// How many products the top-seller list keeps.
pub const TOP_PRODUCT_LIMIT: usize = 5;

/// Revenue bucketed by calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueByDate {
    pub date: NaiveDate,
    pub total_revenue: Money,
}

/// Per-product sales totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub total_quantity: i64,
    pub total_revenue: Money,
}

/// Summary served by the analytics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_orders: u64,
    pub total_revenue: Money,
    /// Ascending by date.
    pub revenue_by_date: Vec<RevenueByDate>,
    /// Descending by revenue, at most [`TOP_PRODUCT_LIMIT`] entries.
    pub top_products: Vec<TopProduct>,
}

/// Derive an analytics summary from fetched orders and a catalog snapshot.
///
/// Deterministic: order totals are taken as stored, per-product revenue is
/// recomputed as catalog price × quantity. A SKU missing from the catalog
/// still counts its quantity but contributes zero revenue, the same lenient
/// rule the order form's live subtotal uses.
pub fn summarize(orders: &[OrderRecord], catalog: &Catalog) -> AnalyticsSummary {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    let mut by_sku: HashMap<Sku, (i64, Money)> = HashMap::new();
    let mut total_revenue = Money::ZERO;

    for order in orders {
        total_revenue = total_revenue.saturating_add(order.total_amount);

        let bucket = by_date
            .entry(order.created_at.date_naive())
            .or_insert(Money::ZERO);
        *bucket = bucket.saturating_add(order.total_amount);

        for item in &order.items {
            let entry = by_sku.entry(item.sku.clone()).or_insert((0, Money::ZERO));
            entry.0 += item.quantity;

            let revenue = catalog
                .unit_price_of(&item.sku)
                .and_then(|price| price.line_total(item.quantity))
                .unwrap_or(Money::ZERO);
            entry.1 = entry.1.saturating_add(revenue);
        }
    }

    let mut top_products: Vec<TopProduct> = by_sku
        .into_iter()
        .map(|(sku, (total_quantity, total_revenue))| TopProduct {
            sku,
            total_quantity,
            total_revenue,
        })
        .collect();
    top_products.sort_by(|a, b| {
        b.total_revenue
            .cmp(&a.total_revenue)
            .then(b.total_quantity.cmp(&a.total_quantity))
            .then(a.sku.as_str().cmp(b.sku.as_str()))
    });
    top_products.truncate(TOP_PRODUCT_LIMIT);

    AnalyticsSummary {
        total_orders: orders.len() as u64,
        total_revenue,
        revenue_by_date: by_date
            .into_iter()
            .map(|(date, total_revenue)| RevenueByDate {
                date,
                total_revenue,
            })
            .collect(),
        top_products,
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use shoplens_core::{CurrencyCode, Money, OrderId, UserId};

use crate::composer::OrderLine;

/// Stored order as returned by the orders API.
///
/// `id` is the storage identifier; `order_id` is the human-assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub order_id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderLine>,
    pub total_amount: Money,
    pub currency: CurrencyCode,
    pub created_at: DateTime<Utc>,
}

/// Client-side filter over a fetched order list.
///
/// Mirrors the orders page controls: minimum total and a date range. The `to`
/// bound is inclusive through the end of that day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub min_total: Option<Money>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_total(mut self, min_total: Money) -> Self {
        self.min_total = Some(min_total);
        self
    }

    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    pub fn matches(&self, order: &OrderRecord) -> bool {
        if let Some(min) = self.min_total {
            if order.total_amount < min {
                return false;
            }
        }

        // Comparing calendar dates makes `to` cover the whole day.
        let date = order.created_at.date_naive();
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }

    /// Filter a fetched order list, preserving order.
    pub fn apply(&self, orders: &[OrderRecord]) -> Vec<OrderRecord> {
        orders
            .iter()
            .filter(|order| self.matches(order))
            .cloned()
            .collect()
    }
}

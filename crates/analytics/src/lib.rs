//! Analytics read models.
//!
//! Shapes mirror the `/analytics/summary` response; [`summarize`] derives the
//! same summary locally from an order list and a catalog snapshot.

pub mod summary;

pub use summary::{summarize, AnalyticsSummary, RevenueByDate, TopProduct, TOP_PRODUCT_LIMIT};

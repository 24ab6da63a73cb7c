use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use shoplens_analytics::AnalyticsSummary;
use shoplens_catalog::{Catalog, Product};
use shoplens_orders::{ComposedOrder, OrderRecord};

use crate::error::ApiError;

/// Fallback API location for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Greeting returned by the API root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub message: String,
}

/// Client for the remote analytics API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Build a client from `SHOPLENS_API_URL`, defaulting to localhost.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SHOPLENS_API_URL").unwrap_or_else(|_| {
            tracing::warn!("SHOPLENS_API_URL not set; using {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;
        Self::decode(resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let reason = resp.text().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                reason,
            });
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Single probe against the API root. No polling.
    pub async fn health(&self) -> Result<HealthCheck, ApiError> {
        self.get_json("/").await
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products/").await
    }

    /// Product-Lookup collaborator: the product feed folded into a catalog
    /// snapshot.
    pub async fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
        let products = self.fetch_products().await?;
        tracing::debug!(products = products.len(), "catalog snapshot fetched");
        Ok(Catalog::from_products(products))
    }

    pub async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        self.get_json("/orders/").await
    }

    pub async fn fetch_summary(&self) -> Result<AnalyticsSummary, ApiError> {
        self.get_json("/analytics/summary").await
    }

    /// Bulk-ingest validated products.
    pub async fn submit_products(&self, products: &[Product]) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post_json("/products/bulk-ingest", products).await?;
        tracing::info!(count = products.len(), "products submitted");
        Ok(())
    }

    /// Order-Submission collaborator.
    ///
    /// The ingest endpoint takes an array, so one composed order goes up as a
    /// single-element batch.
    pub async fn submit_order(&self, order: &ComposedOrder) -> Result<(), ApiError> {
        let batch = [order];
        let _: serde_json::Value = self.post_json("/orders/bulk-ingest", &batch).await?;
        tracing::info!(
            order_id = %order.order_id,
            total_amount = %order.total_amount,
            "order submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn health_check_deserializes() {
        let health: HealthCheck =
            serde_json::from_str(r#"{"message": "E-commerce Analytics API"}"#).unwrap();
        assert_eq!(health.message, "E-commerce Analytics API");
    }
}

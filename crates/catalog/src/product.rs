use serde::{Deserialize, Serialize};

use shoplens_core::{CurrencyCode, DomainError, DomainResult, Money, Sku};

/// Sellable item as served by the products API.
///
/// `id` is the storage identifier assigned by the server; it is absent on
/// products that have not been ingested yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sku: Sku,
    pub name: String,
    pub category: String,
    /// Unit price in smallest currency unit.
    #[serde(rename = "price")]
    pub unit_price: Money,
    pub currency: CurrencyCode,
    pub in_stock: bool,
}

/// Product as entered in the add-product form, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: Sku,
    pub name: String,
    pub category: String,
    #[serde(rename = "price")]
    pub unit_price: Money,
    pub currency: CurrencyCode,
    pub in_stock: bool,
}

impl NewProduct {
    /// Validate the form fields and produce a product ready for ingestion.
    ///
    /// SKU, name and category must be non-blank and the price strictly
    /// positive. The currency tag is carried through untouched.
    pub fn validate(self) -> DomainResult<Product> {
        if self.sku.as_str().trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if self.unit_price == Money::ZERO {
            return Err(DomainError::validation("price must be a positive amount"));
        }

        Ok(Product {
            id: None,
            sku: self.sku,
            name: self.name,
            category: self.category,
            unit_price: self.unit_price,
            currency: self.currency,
            in_stock: self.in_stock,
        })
    }
}

use std::collections::HashMap;

use shoplens_core::{Money, Sku};

use crate::product::Product;

/// Read-only snapshot of sellable items for one order-entry session.
///
/// Built once from the product feed at session start and never refreshed for
/// the lifetime of the session; a catalog update on the server is only picked
/// up by the next snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_sku: HashMap<Sku, usize>,
}

impl Catalog {
    /// Build a snapshot from a product list.
    ///
    /// When a SKU appears more than once the later entry wins, matching how a
    /// re-ingested feed overrides earlier rows.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut by_sku = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            by_sku.insert(product.sku.clone(), index);
        }
        Self { products, by_sku }
    }

    pub fn get(&self, sku: &Sku) -> Option<&Product> {
        self.by_sku.get(sku).map(|&index| &self.products[index])
    }

    pub fn contains(&self, sku: &Sku) -> bool {
        self.by_sku.contains_key(sku)
    }

    pub fn unit_price_of(&self, sku: &Sku) -> Option<Money> {
        self.get(sku).map(|product| product.unit_price)
    }

    /// All products in feed order (duplicated SKUs included).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of distinct SKUs in the snapshot.
    pub fn len(&self) -> usize {
        self.by_sku.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sku.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplens_core::CurrencyCode;

    fn test_product(sku: &str, price_minor: u64) -> Product {
        Product {
            id: None,
            sku: Sku::new(sku),
            name: format!("Product {sku}"),
            category: "general".to_string(),
            unit_price: Money::from_minor(price_minor),
            currency: CurrencyCode::new("INR"),
            in_stock: true,
        }
    }

    #[test]
    fn lookup_by_sku() {
        let catalog = Catalog::from_products(vec![
            test_product("P1", 100),
            test_product("P2", 50),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&Sku::new("P1")));
        assert!(!catalog.contains(&Sku::new("P9")));
        assert_eq!(
            catalog.unit_price_of(&Sku::new("P2")),
            Some(Money::from_minor(50))
        );
        assert_eq!(catalog.unit_price_of(&Sku::new("P9")), None);
    }

    #[test]
    fn later_duplicate_sku_wins() {
        let catalog = Catalog::from_products(vec![
            test_product("P1", 100),
            test_product("P1", 250),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.unit_price_of(&Sku::new("P1")),
            Some(Money::from_minor(250))
        );
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(&Sku::new("P1")), None);
    }
}

use crate::product::Product;

/// Page size used by the product listing.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matches across all pages.
    pub total_items: usize,
    /// 1-based index of this page.
    pub page: usize,
    pub total_pages: usize,
}

/// Search and pagination over an in-memory product list.
///
/// Matches the product listing behavior: case-insensitive substring match on
/// name or SKU, fixed page size, out-of-range pages clamped into range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    search: Option<String>,
    page: usize,
    page_size: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by a search term matched against name or SKU.
    ///
    /// A blank term is the same as no search.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    /// Select a 1-based page; 0 is treated as page 1.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn matches(&self, product: &Product) -> bool {
        match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                product.name.to_lowercase().contains(&term)
                    || product.sku.as_str().to_lowercase().contains(&term)
            }
        }
    }

    /// Run the query, cloning the matching slice of products.
    pub fn apply(&self, products: &[Product]) -> Page<Product> {
        let matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();

        let total_items = matched.len();
        let total_pages = total_items.div_ceil(self.page_size);
        let page = self.page.clamp(1, total_pages.max(1));

        let start = (page - 1) * self.page_size;
        let items = matched
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        Page {
            items,
            total_items,
            page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplens_core::{CurrencyCode, Money, Sku};

    fn test_product(sku: &str, name: &str) -> Product {
        Product {
            id: None,
            sku: Sku::new(sku),
            name: name.to_string(),
            category: "general".to_string(),
            unit_price: Money::from_minor(1000),
            currency: CurrencyCode::new("INR"),
            in_stock: true,
        }
    }

    fn test_inventory(count: usize) -> Vec<Product> {
        (1..=count)
            .map(|n| test_product(&format!("P{n}"), &format!("Product {n}")))
            .collect()
    }

    #[test]
    fn search_matches_name_and_sku_case_insensitively() {
        let products = vec![
            test_product("P1", "Wireless Mouse"),
            test_product("P2", "Desk Lamp"),
            test_product("MOUSE-PAD", "Cork Mat"),
        ];

        let page = ProductQuery::new().with_search("mouse").apply(&products);
        let skus: Vec<&str> = page.items.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["P1", "MOUSE-PAD"]);
    }

    #[test]
    fn blank_search_returns_everything() {
        let products = test_inventory(3);
        let page = ProductQuery::new().with_search("   ").apply(&products);
        assert_eq!(page.total_items, 3);
    }

    #[test]
    fn pagination_splits_results_into_fixed_pages() {
        let products = test_inventory(37);

        let first = ProductQuery::new().apply(&products);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_items, 37);
        assert_eq!(first.total_pages, 4);
        assert_eq!(first.page, 1);

        let last = ProductQuery::new().with_page(4).apply(&products);
        assert_eq!(last.items.len(), 7);
        assert_eq!(last.items[0].sku, Sku::new("P31"));
    }

    #[test]
    fn out_of_range_page_clamps_to_last_page() {
        let products = test_inventory(15);
        let page = ProductQuery::new().with_page(99).apply(&products);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn no_matches_yields_an_empty_first_page() {
        let products = test_inventory(5);
        let page = ProductQuery::new().with_search("widget").apply(&products);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }
}

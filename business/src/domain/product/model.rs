use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    pub in_stock: bool,
    pub rating: f32,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    pub in_stock: bool,
    pub rating: f32,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if !props.price.is_finite() || props.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            description: props.description,
            category: props.category,
            price: props.price,
            image_url: props.image_url,
            in_stock: props.in_stock,
            rating: props.rating,
        })
    }

    /// Case-insensitive equality on the whole category, not a substring match.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive substring match against name or description.
    /// An empty query matches every product.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// Result envelope for a product listing.
///
/// Paging fields are placeholders: every listing is a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    pub products: Vec<Product>,
    pub total: usize,
    pub current_page: u32,
    pub total_pages: u32,
}

impl ProductList {
    pub fn single_page(products: Vec<Product>) -> Self {
        Self {
            total: products.len(),
            products,
            current_page: 1,
            total_pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, price: f64) -> NewProductProps {
        NewProductProps {
            id: ProductId::new("1"),
            name: name.to_string(),
            description: "El último smartphone de Apple con chip A17 Pro".to_string(),
            category: "Electrónicos".to_string(),
            price,
            image_url: "https://example.com/phone.png".to_string(),
            in_stock: true,
            rating: 4.8,
        }
    }

    #[test]
    fn should_create_product_with_valid_props() {
        let product = Product::new(props("iPhone 15 Pro", 999.99)).unwrap();

        assert_eq!(product.id, ProductId::new("1"));
        assert_eq!(product.name, "iPhone 15 Pro");
        assert_eq!(product.price, 999.99);
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Product::new(props("   ", 10.0));
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Product::new(props("iPad Air", -1.0));
        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[test]
    fn should_reject_nan_price() {
        let result = Product::new(props("iPad Air", f64::NAN));
        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[test]
    fn should_accept_free_product() {
        assert!(Product::new(props("Sticker", 0.0)).is_ok());
    }

    #[test]
    fn should_match_category_ignoring_case() {
        let product = Product::new(props("iPhone 15 Pro", 999.99)).unwrap();

        assert!(product.matches_category("electrónicos"));
        assert!(product.matches_category("ELECTRÓNICOS"));
        assert!(!product.matches_category("electr"));
        assert!(!product.matches_category(""));
    }

    #[test]
    fn should_match_query_in_name_or_description() {
        let product = Product::new(props("iPhone 15 Pro", 999.99)).unwrap();

        assert!(product.matches_query("PRO"));
        assert!(product.matches_query("smartphone"));
        assert!(product.matches_query(""));
        assert!(!product.matches_query("tablet"));
    }

    #[test]
    fn should_build_single_page_envelope() {
        let product = Product::new(props("iPhone 15 Pro", 999.99)).unwrap();
        let list = ProductList::single_page(vec![product.clone(), product]);

        assert_eq!(list.total, 2);
        assert_eq!(list.current_page, 1);
        assert_eq!(list.total_pages, 1);
        assert_eq!(list.products.len(), 2);
    }

    #[test]
    fn should_build_empty_envelope() {
        let list = ProductList::single_page(Vec::new());

        assert_eq!(list.total, 0);
        assert_eq!(list.total_pages, 1);
        assert!(list.products.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn query_match_ignores_ascii_case(query in "[a-zA-Z0-9 ]{0,8}") {
                let product = Product::new(props("iPhone 15 Pro", 999.99)).unwrap();

                prop_assert_eq!(
                    product.matches_query(&query.to_uppercase()),
                    product.matches_query(&query.to_lowercase())
                );
            }

            #[test]
            fn substring_of_name_always_matches(start in 0usize..13, len in 0usize..13) {
                let product = Product::new(props("iPhone 15 Pro", 999.99)).unwrap();
                let end = (start + len).min(product.name.len());
                let needle = &product.name[start.min(end)..end];

                prop_assert!(product.matches_query(needle));
            }

            #[test]
            fn category_match_requires_whole_value(category in "[a-z]{1,8}") {
                let product = Product::new(props("iPhone 15 Pro", 999.99)).unwrap();

                prop_assert_eq!(
                    product.matches_category(&category),
                    category == "electrónicos"
                );
            }
        }
    }
}

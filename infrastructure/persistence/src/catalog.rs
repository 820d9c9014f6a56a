use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::shared::value_objects::ProductId;

/// In-memory product catalog.
///
/// Owns the product records exclusively and only hands out shared borrows,
/// so nothing downstream can mutate it once constructed.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Builds the store in the given order, validating every record.
    pub fn new(products: Vec<NewProductProps>) -> Result<Self, ProductError> {
        let products = products
            .into_iter()
            .map(Product::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { products })
    }

    /// Catalog seeded with the four demo products, ids "1" to "4".
    pub fn seeded() -> Result<Self, ProductError> {
        Self::new(vec![
            NewProductProps {
                id: ProductId::new("1"),
                name: "iPhone 15 Pro".to_string(),
                description: "El último smartphone de Apple con chip A17 Pro".to_string(),
                category: "Electrónicos".to_string(),
                price: 999.99,
                image_url: "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400"
                    .to_string(),
                in_stock: true,
                rating: 4.8,
            },
            NewProductProps {
                id: ProductId::new("2"),
                name: "MacBook Air M2".to_string(),
                description: "Laptop ultradelgada con chip M2".to_string(),
                category: "Computadoras".to_string(),
                price: 1199.99,
                image_url: "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=400"
                    .to_string(),
                in_stock: true,
                rating: 4.7,
            },
            NewProductProps {
                id: ProductId::new("3"),
                name: "AirPods Pro".to_string(),
                description: "Audífonos inalámbricos con cancelación activa de ruido".to_string(),
                category: "Audio".to_string(),
                price: 249.99,
                image_url: "https://images.unsplash.com/photo-1606220588913-b3aacb4d2f46?w=400"
                    .to_string(),
                in_stock: false,
                rating: 4.6,
            },
            NewProductProps {
                id: ProductId::new("4"),
                name: "iPad Air".to_string(),
                description: "Tablet versátil para trabajo y entretenimiento".to_string(),
                category: "Tablets".to_string(),
                price: 599.99,
                image_url: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400"
                    .to_string(),
                in_stock: true,
                rating: 4.5,
            },
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

//! Static food catalog.

use food_delivery_core::{Price, Product, ProductIndex};

/// Products on offer, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The fixed menu: Pizza, Burger, Pasta, Salad.
    #[must_use]
    pub fn food() -> Self {
        Self::new(vec![
            Product::new("Pizza", Price::whole(10)),
            Product::new("Burger", Price::whole(5)),
            Product::new("Pasta", Price::whole(8)),
            Product::new("Salad", Price::whole(6)),
        ])
    }

    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, index: ProductIndex) -> Option<&Product> {
        self.products.get(index.as_usize())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::food()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_food_menu_order_and_prices() {
        let catalog = Catalog::food();
        let menu: Vec<(&str, Price)> = catalog
            .products()
            .iter()
            .map(|p| (p.name.as_str(), p.price))
            .collect();
        assert_eq!(
            menu,
            vec![
                ("Pizza", Price::whole(10)),
                ("Burger", Price::whole(5)),
                ("Pasta", Price::whole(8)),
                ("Salad", Price::whole(6)),
            ]
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = Catalog::food();
        assert_eq!(catalog.get(ProductIndex::new(3)).unwrap().name, "Salad");
        assert!(catalog.get(ProductIndex::new(4)).is_none());
    }
}

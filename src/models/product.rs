use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub type ProductId = u32;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,        // Stable catalog id
    pub name: String,         // Display name
    pub price: u32,           // Whole rupees, display only
    pub image: String,        // Remote image URL
}

impl Product {
    fn new(id: ProductId, name: &str, price: u32, image: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            image: image.to_string(),
        }
    }

    /// Price as shown on the product card.
    pub fn display_price(&self) -> String {
        format!("₹{}", self.price)
    }
}

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(
            1,
            "Wireless Headphones",
            1999,
            "https://m.media-amazon.com/images/I/51FNnHjzhQL._UF1000,1000_QL80_.jpg",
        ),
        Product::new(
            2,
            "Smartphone",
            14999,
            "https://platform.theverge.com/wp-content/uploads/sites/2/chorus/uploads/chorus_asset/file/25626687/DSC08433.jpg?quality=90&strip=all&crop=16.675%2C0%2C66.65%2C100&w=2400",
        ),
        Product::new(
            3,
            "Coffee Maker",
            2499,
            "https://m.media-amazon.com/images/I/61x2BKrHBKL._UF894,1000_QL80_.jpg",
        ),
        Product::new(
            4,
            "Laptop",
            49999,
            "https://m.media-amazon.com/images/I/510uTHyDqGL.jpg",
        ),
        Product::new(
            5,
            "Smartwatch",
            7999,
            "https://m.media-amazon.com/images/I/71nzWfUAt+L._UF1000,1000_QL80_.jpg",
        ),
        Product::new(
            6,
            "Gaming Chair",
            11999,
            "https://drogo.in/cdn/shop/files/DGC003.jpg?v=1749299158",
        ),
        Product::new(
            7,
            "Air Conditioner",
            29999,
            "https://api.hisense-india.com/media/categories/air-conditioner-thumb_image-1675223163-6794.png",
        ),
        Product::new(
            8,
            "Bluetooth Speaker",
            2999,
            "https://m.media-amazon.com/images/I/71L9o0-0SML._UF1000,1000_QL80_.jpg",
        ),
    ]
});

/// The fixed storefront catalog, in display order.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

pub fn find_product(id: ProductId) -> Option<&'static Product> {
    catalog().iter().find(|product| product.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique_and_ordered() {
        let ids: Vec<ProductId> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn catalog_is_stable_across_calls() {
        assert!(std::ptr::eq(catalog(), catalog()));
    }

    #[test]
    fn find_product_by_id() {
        let laptop = find_product(4).expect("laptop is in the catalog");
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.display_price(), "₹49999");
        assert!(find_product(99).is_none());
    }
}

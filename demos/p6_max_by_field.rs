//! Pattern 6: Max-by-Field Reduction
//! Example: Most Expensive Product in a Slice
//!
//! Run with: cargo run --example p6_max_by_field

#[derive(Debug, Clone, PartialEq)]
struct Product {
    name: String,
    price: u32,
}

impl Product {
    fn new(name: &str, price: u32) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }
}

/// The product with the highest price, or `None` for an empty slice. Ties
/// resolve to the last product seen, per `max_by_key`.
fn most_expensive(products: &[Product]) -> Option<&Product> {
    products.iter().max_by_key(|p| p.price)
}

fn main() {
    let products = vec![
        Product::new("Pen", 10),
        Product::new("Notebook", 55),
        Product::new("Bag", 50),
    ];

    println!("=== Catalog ===");
    for product in &products {
        println!("{}: {}", product.name, product.price);
    }

    println!("\n=== Most Expensive ===");
    match most_expensive(&products) {
        Some(product) => println!("{} at {}", product.name, product.price), // Notebook at 55
        None => println!("catalog is empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_highest_price() {
        let products = vec![
            Product::new("Pen", 10),
            Product::new("Notebook", 55),
            Product::new("Bag", 50),
        ];
        let top = most_expensive(&products).unwrap();
        assert_eq!(top.name, "Notebook");
        assert_eq!(top.price, 55);
    }

    #[test]
    fn empty_slice_has_no_answer() {
        assert_eq!(most_expensive(&[]), None);
    }

    #[test]
    fn single_product_wins_by_default() {
        let products = vec![Product::new("Pen", 10)];
        assert_eq!(most_expensive(&products).unwrap().name, "Pen");
    }
}

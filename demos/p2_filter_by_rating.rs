//! Pattern 2: Filtering by Field
//! Example: Keep Items Whose Rating Clears a Threshold
//!
//! Run with: cargo run --example p2_filter_by_rating

#[derive(Debug, Clone, PartialEq)]
struct Book {
    title: String,
    rating: f64,
}

impl Book {
    fn new(title: &str, rating: f64) -> Self {
        Self {
            title: title.to_string(),
            rating,
        }
    }
}

/// Keep the books rated 4.0 or higher, preserving order.
fn filter_by_rating(items: Vec<Book>) -> Vec<Book> {
    items.into_iter().filter(|item| item.rating >= 4.0).collect()
}

fn main() {
    let books = vec![
        Book::new("Book A", 4.5),
        Book::new("Book B", 3.2),
        Book::new("Book C", 5.0),
    ];

    println!("=== All Books ===");
    for book in &books {
        println!("{} ({})", book.title, book.rating);
    }

    println!("\n=== Rated 4.0 or Higher ===");
    // Keeps Book A and Book C; Book B falls below the threshold.
    for book in filter_by_rating(books) {
        println!("{} ({})", book.title, book.rating);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_books_at_or_above_four() {
        let books = vec![
            Book::new("Book A", 4.5),
            Book::new("Book B", 3.2),
            Book::new("Book C", 5.0),
        ];
        let kept = filter_by_rating(books);
        let titles: Vec<&str> = kept.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Book A", "Book C"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let kept = filter_by_rating(vec![Book::new("Edge", 4.0)]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_by_rating(Vec::new()).is_empty());
    }
}

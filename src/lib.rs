//! # Language Feature Patterns
//!
//! This crate contains runnable demos of isolated language features. Each demo
//! is self-contained, shares no state with the others, and drives its function
//! once with literal inputs to print an expected value.
//!
//! ## Patterns Covered
//!
//! 1. **String Casing** - Upper/lower formatting with an optional flag
//! 2. **Filtering by Field** - Keep items whose rating clears a threshold
//! 3. **Generic Concatenation** - Flatten any number of sequences into one
//! 4. **Composition over Inheritance** - A base struct extended by embedding
//! 5. **Enum Dispatch** - One operation over a text-or-number value
//! 6. **Max-by-Field Reduction** - Most expensive product in a slice
//! 7. **Enumerated-Day Classification** - Weekday vs weekend
//! 8. **Delayed Computation** - Precondition check, then a fixed-delay square
//!
//! ## Running Demos
//!
//! ```bash
//! cargo run --example p1_string_casing
//! cargo run --example p2_filter_by_rating
//! cargo run --example p3_concat_sequences
//! cargo run --example p4_struct_composition
//! cargo run --example p5_value_dispatch
//! cargo run --example p6_max_by_field
//! cargo run --example p7_day_classifier
//! cargo run --example p8_delayed_square
//! ```
//!
//! ## Key Dependencies
//!
//! - `tokio` - Async runtime and timer for the delayed computation
//! - `thiserror` - Derive macro for the library error type
//! - `futures` - Future composition in demos and tests
//! - `itertools` - Iterator conveniences in the sequence demos

pub mod delayed;

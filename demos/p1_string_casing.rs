//! Pattern 1: String Casing
//! Example: Upper/Lower Formatting with an Optional Flag
//!
//! Run with: cargo run --example p1_string_casing

/// Format a string to upper or lower case. Upper is the default when the
/// caller states no preference.
fn format_string(input: &str, to_upper: Option<bool>) -> String {
    match to_upper {
        Some(false) => input.to_lowercase(),
        _ => input.to_uppercase(),
    }
}

fn main() {
    println!("=== Default Casing ===");
    // Usage: None means "no preference", which falls back to upper.
    println!(
        "format_string(\"Hello\", None) = {:?}",
        format_string("Hello", None) // "HELLO"
    );

    println!("\n=== Explicit Flags ===");
    println!(
        "format_string(\"Hello\", Some(true)) = {:?}",
        format_string("Hello", Some(true)) // "HELLO"
    );
    println!(
        "format_string(\"Hello\", Some(false)) = {:?}",
        format_string("Hello", Some(false)) // "hello"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_upper() {
        assert_eq!(format_string("Hello", None), "HELLO");
    }

    #[test]
    fn explicit_flags_pick_the_case() {
        assert_eq!(format_string("Hello", Some(true)), "HELLO");
        assert_eq!(format_string("Hello", Some(false)), "hello");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_string("", None), "");
    }
}

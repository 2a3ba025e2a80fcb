//! Pattern 5: Enum Dispatch
//! Example: One Operation over a Text-or-Number Value
//!
//! Run with: cargo run --example p5_value_dispatch

// Where a structurally-typed language would take "string | number", Rust
// names the union as an enum and matches on it exhaustively.
enum Value {
    Text(String),
    Number(i64),
}

/// Numbers are doubled; text maps to its length.
fn process_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n * 2,
        Value::Text(s) => s.len() as i64,
    }
}

fn main() {
    let text = Value::Text("hello".to_string());
    let number = Value::Number(10);

    println!("=== Text Branch ===");
    println!("process_value(\"hello\") = {}", process_value(&text)); // 5

    println!("\n=== Number Branch ===");
    println!("process_value(10) = {}", process_value(&number)); // 20
}

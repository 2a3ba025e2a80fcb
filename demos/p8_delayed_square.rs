//! Pattern 8: Delayed Computation
//! Example: Synchronous Precondition, Fixed-Delay Result
//!
//! Run with: cargo run --example p8_delayed_square

use language_feature_patterns::delayed::{compute, square_delayed, COMPUTE_DELAY};
use tokio::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== Success Path ===");
    let start = Instant::now();
    let pending = compute(4)?;
    println!(
        "scheduled square of {} with a {:?} delay",
        pending.input(),
        COMPUTE_DELAY
    );
    let value = pending.await;
    println!("resolved to {} after {:?}", value, start.elapsed()); // 16, after ~1s

    println!("\n=== Failure Path ===");
    // The precondition fails before any timer is registered; the error is
    // observable immediately.
    match compute(-3) {
        Ok(pending) => println!("unexpectedly scheduled input {}", pending.input()),
        Err(e) => println!("compute(-3) failed at once: {}", e), // Negative number not allowed
    }

    println!("\n=== Independent Calls ===");
    // Two requests for the same input resolve separately; nothing is shared.
    let (a, b) = futures::future::join(compute(3)?, compute(3)?).await;
    println!("two compute(3) calls resolved to {} and {}", a, b); // 9 and 9

    println!("\n=== Convenience Wrapper ===");
    println!("square_delayed(1) = {:?}", square_delayed(1).await); // Ok(1)

    Ok(())
}

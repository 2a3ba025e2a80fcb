//! Pattern 4: Composition over Inheritance
//! Example: A Base Struct Extended by Embedding
//!
//! Run with: cargo run --example p4_struct_composition

// The base entity: make and year, with one formatted accessor.
struct Vehicle {
    make: String,
    year: u32,
}

impl Vehicle {
    fn new(make: &str, year: u32) -> Self {
        Self {
            make: make.to_string(),
            year,
        }
    }

    fn info(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }
}

// The extended entity embeds the base instead of inheriting from it. With a
// single variant in use there is no need for dynamic dispatch; delegation is
// one method call.
struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    fn new(make: &str, year: u32, model: &str) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.to_string(),
        }
    }

    /// Delegates to the embedded base.
    fn info(&self) -> String {
        self.vehicle.info()
    }

    fn model(&self) -> String {
        format!("Model: {}", self.model)
    }
}

fn main() {
    let my_car = Car::new("Toyota", 2020, "Corolla");

    println!("=== Base Accessor (delegated) ===");
    println!("{}", my_car.info()); // Make: Toyota, Year: 2020

    println!("\n=== Extension Accessor ===");
    println!("{}", my_car.model()); // Model: Corolla
}

//! Pattern 7: Enumerated-Day Classification
//! Example: Weekday vs Weekend
//!
//! Run with: cargo run --example p7_day_classifier

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

fn day_type(day: Day) -> &'static str {
    match day {
        Day::Saturday | Day::Sunday => "Weekend",
        _ => "Weekday",
    }
}

fn main() {
    println!("=== The Two Named Cases ===");
    println!("day_type(Monday) = {}", day_type(Day::Monday)); // Weekday
    println!("day_type(Sunday) = {}", day_type(Day::Sunday)); // Weekend

    println!("\n=== Full Week ===");
    for day in Day::ALL {
        println!("{:?} -> {}", day, day_type(day));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekdays_classify_as_weekday() {
        for day in [
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
        ] {
            assert_eq!(day_type(day), "Weekday");
        }
    }

    #[test]
    fn saturday_and_sunday_classify_as_weekend() {
        assert_eq!(day_type(Day::Saturday), "Weekend");
        assert_eq!(day_type(Day::Sunday), "Weekend");
    }
}

//! Pattern 3: Generic Concatenation
//! Example: Flatten Any Number of Sequences into One
//!
//! Run with: cargo run --example p3_concat_sequences

use itertools::Itertools;

/// Concatenate any number of vectors into one, generically over the element
/// type. Order is preserved: all of the first vector, then all of the second.
fn concatenate<T>(arrays: Vec<Vec<T>>) -> Vec<T> {
    arrays.into_iter().flatten().collect()
}

/// The same operation via itertools, which names the intent directly.
fn concatenate_concat<T>(arrays: Vec<Vec<T>>) -> Vec<T> {
    arrays.into_iter().concat()
}

fn main() {
    println!("=== Flatten ===");
    let joined = concatenate(vec![vec!["a", "b"], vec!["c"]]);
    println!("concatenate([a, b], [c]) = {:?}", joined); // ["a", "b", "c"]

    let numbers = concatenate(vec![vec![1, 2], vec![3, 4], vec![5]]);
    println!("concatenate([1, 2], [3, 4], [5]) = {:?}", numbers); // [1, 2, 3, 4, 5]

    println!("\n=== Itertools Concat ===");
    let numbers = concatenate_concat(vec![vec![1, 2], vec![3, 4], vec![5]]);
    println!("concatenate_concat([1, 2], [3, 4], [5]) = {:?}", numbers);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_string_slices_in_order() {
        assert_eq!(
            concatenate(vec![vec!["a", "b"], vec!["c"]]),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn joins_numbers_across_three_inputs() {
        assert_eq!(
            concatenate(vec![vec![1, 2], vec![3, 4], vec![5]]),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn both_spellings_agree() {
        let input = vec![vec![1, 2], vec![3, 4], vec![5]];
        assert_eq!(concatenate(input.clone()), concatenate_concat(input));
    }

    #[test]
    fn no_inputs_yield_an_empty_vec() {
        assert_eq!(concatenate::<i32>(Vec::new()), Vec::<i32>::new());
    }
}

//! Chained Operations
//!
//! This example demonstrates operator handling and the computation tape.
//!
//! Key concepts:
//! - An operator press commits the current operand
//! - Pressing another operator before typing digits swaps the operator
//! - A result chains into the next computation
//! - Division by zero is absorbed as a no-op
//!
//! Run with: cargo run --example chained_operations

use tenkey::keys;
use tenkey::Calculator;

fn main() {
    println!("=== Chained Operations ===\n");

    let mut calculator = Calculator::new();

    println!("2 + 3 = ...");
    calculator.press_all(keys!['2', '+', '3', '=']);
    println!("display: {}\n", calculator.display().unwrap_or_default());

    println!("... * 4 =  (the result chains forward)");
    calculator.press_all(keys!['*', '4', '=']);
    println!("display: {}\n", calculator.display().unwrap_or_default());

    println!("Changing your mind about the operator: 9 + -> / 3 =");
    calculator.press_all(keys!['c', '9', '+', '/', '3', '=']);
    println!("display: {}\n", calculator.display().unwrap_or_default());

    println!("Division by zero is rejected without an error state: 5 / 0 =");
    calculator.press_all(keys!['c', '5', '/', '0', '=']);
    println!(
        "pending: {} | display: {}\n",
        calculator.pending_display().unwrap_or_default(),
        calculator.display().unwrap_or_default()
    );

    println!("Tape of completed computations:");
    for entry in calculator.tape().entries() {
        println!("  {entry}");
    }

    println!("\n=== Example Complete ===");
}

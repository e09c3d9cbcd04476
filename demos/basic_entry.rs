//! Basic Entry
//!
//! This example demonstrates digit entry and the display contract.
//!
//! Key concepts:
//! - The reducer replaces the whole state on every keypress
//! - Operands stay raw strings while being typed
//! - Thousands grouping never touches the fractional digits
//!
//! Run with: cargo run --example basic_entry

use tenkey::keys;
use tenkey::Calculator;

fn main() {
    println!("=== Basic Entry ===\n");

    let mut calculator = Calculator::new();

    for action in keys!['1', '2', '3', '4', '5', '6', '7'] {
        calculator.press(action);
        println!(
            "display: {}",
            calculator.display().unwrap_or_default()
        );
    }

    println!("\nAdding a decimal point keeps in-progress entry verbatim:");
    calculator.press_all(keys!['.']);
    println!("display: {}", calculator.display().unwrap_or_default());

    calculator.press_all(keys!['0', '5']);
    println!("display: {}", calculator.display().unwrap_or_default());

    println!("\nDelete walks back one character at a time:");
    calculator.press_all(keys!['d', 'd', 'd']);
    println!("display: {}", calculator.display().unwrap_or_default());

    println!("\n=== Example Complete ===");
}

//! Interactive REPL
//!
//! A minimal line-based host: every character of each input line is mapped
//! through the keypress adapter and fed to the calculator. This is the
//! whole "UI layer" the engine needs — gesture in, formatted state out.
//!
//! Keys: 0-9 . + - * / =   c = clear   d = delete   q = quit
//!
//! Run with: cargo run --example repl

use std::io::{self, BufRead, Write};

use tenkey::core::Action;
use tenkey::Calculator;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut calculator = Calculator::new();

    println!("tenkey repl - type keys (e.g. 12+3=), q to quit");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if line.trim() == "q" {
            break;
        }

        for key in line.trim().chars() {
            match Action::from_key(key) {
                Some(action) => {
                    calculator.press(action);
                }
                None => println!("(no action for '{key}')"),
            }
        }

        match (calculator.pending_display(), calculator.display()) {
            (Some(pending), Some(current)) => println!("{pending} {current}"),
            (Some(pending), None) => println!("{pending}"),
            (None, Some(current)) => println!("{current}"),
            (None, None) => println!("(empty)"),
        }
    }

    if !calculator.tape().is_empty() {
        println!("\ntape:");
        for entry in calculator.tape().entries() {
            println!("  {entry}");
        }
    }

    Ok(())
}

// Console walkthrough of the OwnedValue exercise: guarded construction,
// guarded mutation, and arithmetic between owned instances.

use colored::Colorize;
use owned_value::{OwnedValue, OwnedValueError};

fn main() {
    println!("=== OwnedValue: exclusive ownership with a non-negativity guard ===\n");

    // -------------------------------------------------------------------------
    // Part 1: get and set
    // -------------------------------------------------------------------------
    println!("--- Part 1: get / set ---");
    let mut pointer = match OwnedValue::with_value(11) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{} {}", "construction failed:".red(), e);
            return;
        }
    };
    println!("constructed with 11, get() = {}", pointer.get());

    if pointer.set(13).is_ok() {
        println!("after set(13), get() = {}", pointer.get());
    }

    // -------------------------------------------------------------------------
    // Part 2: the negative-value guard at construction
    // -------------------------------------------------------------------------
    println!("\n--- Part 2: negative construction is rejected ---");
    match OwnedValue::with_value(-5) {
        Ok(v) => println!("unexpected: constructed {}", v),
        Err(e) => println!("{} {}", "rejected as expected:".green(), e),
    }

    // -------------------------------------------------------------------------
    // Part 3: arithmetic allocates a fresh instance
    // -------------------------------------------------------------------------
    println!("\n--- Part 3: addition ---");
    let a = OwnedValue::with_value(12).expect("12 is non-negative");
    let b = OwnedValue::with_value(10).expect("10 is non-negative");
    match &a + &b {
        Ok(sum) => println!("{} + {} = {}", a, b, sum),
        Err(e) => println!("{} {}", "addition failed:".red(), e),
    }

    // -------------------------------------------------------------------------
    // Part 4: a negative difference never becomes an observable value
    // -------------------------------------------------------------------------
    println!("\n--- Part 4: subtraction below zero ---");
    match &b - &a {
        Ok(diff) => println!("unexpected: {} - {} = {}", b, a, diff),
        Err(OwnedValueError::NegativeValue) => {
            println!(
                "{} {} - {} would be negative; no result instance was created",
                "rejected as expected:".green(),
                b,
                a
            );
        }
        Err(e) => println!("{} {}", "unexpected failure:".red(), e),
    }

    println!("\n{}", "OwnedValue demonstration completed".bold());
}

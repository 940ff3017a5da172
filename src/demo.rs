//! The scripted console walkthrough.
//!
//! A fixed, single-threaded sequence exercising every component in turn:
//! records, aggregation, the processing envelope, a deliberately triggered
//! input-type error, and the file round-trip. Only that deliberate error is
//! caught here; anything else propagates to the caller.

use crate::core::{DemoError, Person, Result};
use crate::persist::{read_from_file, save_to_file};
use crate::processor::process_data;
use crate::stats::{calculate_average, calculate_sum};
use serde_json::json;

/// Run the walkthrough, printing progress to the console.
///
/// Returns `0` on success; the value is surfaced as the process exit code by
/// the binary.
pub fn run() -> Result<i32> {
    banner("Demo Basics Walkthrough");
    println!();

    println!("1. Creating person records:");
    let alice = Person::new("Alice", 30);
    let bob = Person::new("Bob", 25);
    println!("   {}", alice.greet());
    println!("   {}", bob.greet());
    println!();

    println!("2. Calculating sum and average:");
    let numbers = json!([10, 20, 30, 40, 50]);
    let total = calculate_sum(&numbers)?;
    let average = calculate_average(&numbers)?;
    println!("   Numbers: {numbers}");
    println!("   Sum: {total}");
    println!("   Average: {average}");
    println!();

    println!("3. Processing data:");
    let sample_data = json!({
        "users": [alice.to_value(), bob.to_value()],
        "numbers": numbers,
        "statistics": {
            "sum": total,
            "average": average,
        },
    });
    let processed = process_data(sample_data);
    println!("   Data processed at: {}", processed.timestamp);
    println!();

    println!("4. Demonstrating error handling:");
    match calculate_sum(&json!("not a list")) {
        Err(err @ DemoError::InputType(_)) => println!("   Caught expected error: {err}"),
        other => println!("   Unexpected outcome: {other:?}"),
    }
    println!();

    println!("5. File operations:");
    let out_path = std::env::temp_dir().join("demo_output.json");
    save_to_file(&processed, &out_path)?;
    if read_from_file(&out_path)?.is_some() {
        println!("   Successfully read data from {}", out_path.display());
    }
    println!();

    banner("Demo completed successfully!");
    Ok(0)
}

fn banner(title: &str) {
    println!("{}", "=".repeat(50));
    println!("{title}");
    println!("{}", "=".repeat(50));
}

//! Numeric aggregation over dynamically-typed JSON values.
//!
//! The input arrives as a `serde_json::Value` so the sequence check happens
//! at runtime, at the function boundary. Two failure cases stay distinct:
//! a non-sequence argument (`DemoError::InputType`) and a sequence holding a
//! non-numeric element (`DemoError::InputValue`).

use crate::core::{DemoError, Result};
use serde_json::Value;

/// Sum of a JSON array of numbers.
///
/// Does not mutate the input. Integers and floats both count as numeric;
/// everything is accumulated as `f64`.
pub fn calculate_sum(input: &Value) -> Result<f64> {
    let items = match input {
        Value::Array(items) => items,
        other => {
            return Err(DemoError::InputType(format!(
                "Input must be a sequence, got {}",
                type_name(other)
            )));
        }
    };

    let mut total = 0.0;
    for item in items {
        match item.as_f64() {
            Some(n) => total += n,
            None => {
                return Err(DemoError::InputValue(format!(
                    "All elements in the sequence must be numeric, found {}",
                    type_name(item)
                )));
            }
        }
    }
    Ok(total)
}

/// Mean of a JSON array of numbers.
///
/// An empty array averages to `0.0` rather than erroring. Invalid input
/// fails exactly as [`calculate_sum`] does.
pub fn calculate_average(input: &Value) -> Result<f64> {
    match input {
        Value::Array(items) if items.is_empty() => Ok(0.0),
        Value::Array(items) => Ok(calculate_sum(input)? / items.len() as f64),
        // Non-sequences fall through to the sum for its type error.
        other => calculate_sum(other),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

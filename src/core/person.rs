use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A named record with an age, fixed at construction.
///
/// # Examples
///
/// ```
/// use demo_basics::Person;
///
/// let alice = Person::new("Alice", 30);
/// assert_eq!(alice.greet(), "Hello, my name is Alice and I am 30 years old.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Fixed-format greeting interpolating name and age.
    pub fn greet(&self) -> String {
        format!(
            "Hello, my name is {} and I am {} years old.",
            self.name, self.age
        )
    }

    /// The record as a two-key JSON mapping.
    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "age": self.age,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_format() {
        let alice = Person::new("Alice", 30);
        assert_eq!(
            alice.greet(),
            "Hello, my name is Alice and I am 30 years old."
        );
    }

    #[test]
    fn test_to_value_shape() {
        let alice = Person::new("Alice", 30);
        assert_eq!(alice.to_value(), json!({"name": "Alice", "age": 30}));
    }

    #[test]
    fn test_serde_round_trip() {
        let bob = Person::new("Bob", 25);
        let encoded = serde_json::to_string(&bob).unwrap();
        let decoded: Person = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, bob);
    }
}

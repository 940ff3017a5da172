//! Wraps caller-supplied data in a timestamped envelope.

use crate::core::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Processing result: a call-time timestamp, a success marker, and the
/// untouched payload. Each call builds a fresh envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub timestamp: String,
    pub processed: bool,
    pub data: Value,
}

impl Envelope {
    /// The envelope as a three-key JSON mapping.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Wrap `data` with the current local time (RFC 3339) and a `processed`
/// marker. The payload shape is not inspected.
pub fn process_data(data: Value) -> Envelope {
    Envelope {
        timestamp: Local::now().to_rfc3339(),
        processed: true,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn test_envelope_carries_payload() {
        let envelope = process_data(json!({"a": 1}));
        assert!(envelope.processed);
        assert_eq!(envelope.data, json!({"a": 1}));
    }

    #[test]
    fn test_timestamp_is_parseable() {
        let envelope = process_data(json!([1, 2, 3]));
        assert!(DateTime::parse_from_rfc3339(&envelope.timestamp).is_ok());
    }

    #[test]
    fn test_to_value_shape() {
        let envelope = process_data(json!({"k": "v"}));
        let value = envelope.to_value().unwrap();
        assert_eq!(value["processed"], json!(true));
        assert_eq!(value["data"], json!({"k": "v"}));
        assert_eq!(value["timestamp"], json!(envelope.timestamp));
    }

    #[test]
    fn test_envelopes_are_independent() {
        let a = process_data(json!({"n": 1}));
        let b = process_data(json!({"n": 2}));
        assert_ne!(a.data, b.data);
    }
}

//! Typed variable values as served by the variable endpoint.

use serde::{Deserialize, Serialize};

/// A single process variable with the engine's runtime type tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableValue {
    /// Engine-side runtime type name (e.g. `"String"`, `"Int64"`, `"Null"`).
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn variable_map_deserializes_engine_payload() {
        let json = r#"{
            "amount": {"type": "Int64", "value": 42},
            "note": {"type": "String", "value": "ok"},
            "missing": {"type": "Null", "value": null}
        }"#;
        let variables: HashMap<String, VariableValue> =
            serde_json::from_str(json).expect("deserialize variable map");
        assert_eq!(variables["amount"].kind, "Int64");
        assert_eq!(variables["amount"].value, serde_json::json!(42));
        assert!(variables["missing"].value.is_null());
    }
}

//! Visitor-entered form state.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Values the visitor has entered in the create-mode form.
///
/// Written only by the create view; the result view reads a snapshot when a
/// trigger fires. `query` is the free-form run-once text next to the
/// declared variables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormInputs {
    /// Variable key to entered value.
    #[serde(default)]
    pub values: HashMap<String, Value>,
    /// Free-form query for a single run.
    #[serde(default)]
    pub query: String,
}

impl FormInputs {
    /// Sets one variable value, replacing any previous entry.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Returns the entered value for a variable key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

use std::collections::HashMap;

/// A flat string-keyed store a host persists step settings in.
pub trait SettingsRecord {
    /// Stored value for `key`, rendered as text. `None` when the key is absent.
    fn get_value(&self, key: &str) -> Option<String>;

    fn set_value(&mut self, key: &str, value: &str);
}

impl SettingsRecord for HashMap<String, String> {
    fn get_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// JSON objects. `null` counts as absent; non-string values are rendered as
/// JSON text so that they fail name validation instead of being ignored.
impl SettingsRecord for serde_json::Map<String, serde_json::Value> {
    fn get_value(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn set_value(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), serde_json::Value::String(value.to_string()));
    }
}

use super::{load_settings, save_settings};
use crate::error::ConfigError;
use model::settings::LogRowSettings;

/// Read settings from a JSON object such as
/// `{"errorLogCase": "FIRST", "nonErrorLogDetail": "ALL_BASIC"}`.
pub fn from_json(source: &str) -> Result<LogRowSettings, ConfigError> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(source)?;
    load_settings(&object)
}

pub fn to_json(settings: &LogRowSettings) -> Result<String, ConfigError> {
    let mut object = serde_json::Map::new();
    save_settings(settings, &mut object);
    Ok(serde_json::to_string_pretty(&object)?)
}

//! Loading and saving of row logging settings.
//!
//! Settings are persisted as two string values under fixed keys. Every
//! format in this module goes through [`load_settings`] / [`save_settings`],
//! so the default and validation rules are the same everywhere: an absent or
//! empty value keeps the default, anything else must be a recognised name.

use crate::error::ConfigError;
use model::settings::{LogRowSettings, error::SettingParseError};
use std::str::FromStr;
use tracing::debug;

pub mod editor;
pub mod json;
pub mod record;
pub mod repository;
pub mod xml;

pub use record::SettingsRecord;

pub const ERROR_LOG_CASE_KEY: &str = "errorLogCase";
pub const NON_ERROR_LOG_DETAIL_KEY: &str = "nonErrorLogDetail";

/// Read settings from a key/value record, starting from the defaults.
pub fn load_settings<R>(record: &R) -> Result<LogRowSettings, ConfigError>
where
    R: SettingsRecord + ?Sized,
{
    let mut settings = LogRowSettings::default();

    if let Some(value) = present(record.get_value(ERROR_LOG_CASE_KEY)) {
        settings.error_log_case = parse_setting(ERROR_LOG_CASE_KEY, &value)?;
    }

    if let Some(value) = present(record.get_value(NON_ERROR_LOG_DETAIL_KEY)) {
        settings.non_error_log_detail = parse_setting(NON_ERROR_LOG_DETAIL_KEY, &value)?;
    }

    debug!(
        error_log_case = %settings.error_log_case,
        non_error_log_detail = %settings.non_error_log_detail,
        "Loaded row logging settings"
    );

    Ok(settings)
}

/// Write both settings by name.
pub fn save_settings<R>(settings: &LogRowSettings, record: &mut R)
where
    R: SettingsRecord + ?Sized,
{
    record.set_value(ERROR_LOG_CASE_KEY, settings.error_log_case.name());
    record.set_value(NON_ERROR_LOG_DETAIL_KEY, settings.non_error_log_detail.name());
}

/// Parse a selector or stored name into a setting, naming the key on failure.
pub(crate) fn parse_setting<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = SettingParseError>,
{
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

use super::{ERROR_LOG_CASE_KEY, NON_ERROR_LOG_DETAIL_KEY, parse_setting};
use crate::error::ConfigError;
use model::settings::{ErrorLogCase, LogRowSettings, NonErrorLogDetail};

/// Edit session over a step's settings, backing a form with one selector per
/// setting. Selections change a draft; [`SettingsEditor::ok`] commits it and
/// [`SettingsEditor::cancel`] discards it.
#[derive(Debug, Clone)]
pub struct SettingsEditor {
    original: LogRowSettings,
    draft: LogRowSettings,
}

impl SettingsEditor {
    pub fn open(settings: &LogRowSettings) -> Self {
        Self {
            original: *settings,
            draft: *settings,
        }
    }

    pub fn error_log_case_options() -> Vec<&'static str> {
        ErrorLogCase::names()
    }

    pub fn non_error_log_detail_options() -> Vec<&'static str> {
        NonErrorLogDetail::names()
    }

    /// Select an error log case by name. An empty selection leaves the draft
    /// untouched.
    pub fn select_error_log_case(&mut self, name: &str) -> Result<(), ConfigError> {
        if !name.is_empty() {
            self.draft.error_log_case = parse_setting(ERROR_LOG_CASE_KEY, name)?;
        }
        Ok(())
    }

    pub fn select_non_error_log_detail(&mut self, name: &str) -> Result<(), ConfigError> {
        if !name.is_empty() {
            self.draft.non_error_log_detail = parse_setting(NON_ERROR_LOG_DETAIL_KEY, name)?;
        }
        Ok(())
    }

    pub fn draft(&self) -> &LogRowSettings {
        &self.draft
    }

    pub fn is_changed(&self) -> bool {
        self.draft != self.original
    }

    pub fn ok(self) -> LogRowSettings {
        self.draft
    }

    pub fn cancel(self) -> LogRowSettings {
        self.original
    }
}

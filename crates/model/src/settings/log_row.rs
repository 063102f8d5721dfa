//! Settings of the row logging step.
//!
//! Both settings are closed enumerations persisted by name. Names are the
//! upper snake case identifiers shown in selectors and stored in pipeline
//! definitions; parsing is case-sensitive.

use super::error::SettingParseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// When a row is logged as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorLogCase {
    /// Every row.
    #[default]
    All,
    /// Only the first row seen by the step.
    First,
    /// Rows carrying fewer values than their schema declares.
    RowUnderRun,
}

impl ErrorLogCase {
    pub const VARIANTS: [ErrorLogCase; 3] = [
        ErrorLogCase::All,
        ErrorLogCase::First,
        ErrorLogCase::RowUnderRun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ErrorLogCase::All => "ALL",
            ErrorLogCase::First => "FIRST",
            ErrorLogCase::RowUnderRun => "ROW_UNDER_RUN",
        }
    }

    /// All names, in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.name()).collect()
    }
}

impl FromStr for ErrorLogCase {
    type Err = SettingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| SettingParseError::UnknownVariant {
                kind: "ErrorLogCase",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ErrorLogCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How much is logged for rows that did not match the error case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NonErrorLogDetail {
    #[default]
    None,
    AllBasic,
    FirstBasic,
    AllDetailed,
    FirstDetailed,
}

impl NonErrorLogDetail {
    pub const VARIANTS: [NonErrorLogDetail; 5] = [
        NonErrorLogDetail::None,
        NonErrorLogDetail::AllBasic,
        NonErrorLogDetail::FirstBasic,
        NonErrorLogDetail::AllDetailed,
        NonErrorLogDetail::FirstDetailed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NonErrorLogDetail::None => "NONE",
            NonErrorLogDetail::AllBasic => "ALL_BASIC",
            NonErrorLogDetail::FirstBasic => "FIRST_BASIC",
            NonErrorLogDetail::AllDetailed => "ALL_DETAILED",
            NonErrorLogDetail::FirstDetailed => "FIRST_DETAILED",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.name()).collect()
    }
}

impl FromStr for NonErrorLogDetail {
    type Err = SettingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| SettingParseError::UnknownVariant {
                kind: "NonErrorLogDetail",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for NonErrorLogDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration of one row logging step instance. Fixed for the lifetime of
/// the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRowSettings {
    pub error_log_case: ErrorLogCase,
    pub non_error_log_detail: NonErrorLogDetail,
}

impl LogRowSettings {
    pub fn new(error_log_case: ErrorLogCase, non_error_log_detail: NonErrorLogDetail) -> Self {
        Self {
            error_log_case,
            non_error_log_detail,
        }
    }
}

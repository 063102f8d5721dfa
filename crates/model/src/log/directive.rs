use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Error,
    Basic,
    None,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "ERROR",
            Severity::Basic => "BASIC",
            Severity::None => "NONE",
        };
        f.write_str(name)
    }
}

/// Outcome of evaluating the logging policy for one row. A message is
/// present exactly when the severity is not [`Severity::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDirective {
    severity: Severity,
    message: Option<String>,
}

impl LogDirective {
    pub fn error(message: String) -> Self {
        Self {
            severity: Severity::Error,
            message: Some(message),
        }
    }

    pub fn basic(message: String) -> Self {
        Self {
            severity: Severity::Basic,
            message: Some(message),
        }
    }

    pub fn none() -> Self {
        Self {
            severity: Severity::None,
            message: None,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_emitted(&self) -> bool {
        self.severity != Severity::None
    }
}

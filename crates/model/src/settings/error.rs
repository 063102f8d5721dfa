use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingParseError {
    #[error("Unknown {kind} value '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

pub mod error;
pub mod log_row;

pub use log_row::{ErrorLogCase, LogRowSettings, NonErrorLogDetail};

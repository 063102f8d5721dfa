pub mod core;
pub mod log;
pub mod records;
pub mod settings;

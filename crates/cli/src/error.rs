use engine_config::error::ConfigError;
use engine_processing::error::ProcessingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read or write a file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load step settings: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read or write CSV rows: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to run the step: {0}")]
    Processing(#[from] ProcessingError),
}

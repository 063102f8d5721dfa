use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("A step needs at least one copy, got {0}")]
    InvalidCopies(usize),

    #[error("Row channel of step copy {0} closed unexpectedly")]
    ChannelClosed(usize),

    #[error("Step copy failed: {0}")]
    CopyFailed(String),
}

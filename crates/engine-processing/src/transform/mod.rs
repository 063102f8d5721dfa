pub mod log_row;
pub mod pipeline;

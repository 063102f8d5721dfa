pub mod context;
pub mod directive;

pub use context::RowEvaluationContext;
pub use directive::{LogDirective, Severity};

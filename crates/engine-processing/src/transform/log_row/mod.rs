//! The row logging step: decides per row whether to log it, at which
//! severity and in how much detail, and always forwards the row unchanged.

pub mod format;
pub mod policy;
pub mod step;

pub use format::{LineEnding, MessageFormat};
pub use policy::evaluate;
pub use step::LogRowStep;

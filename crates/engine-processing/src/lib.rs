pub mod error;
pub mod runner;
pub mod sink;
pub mod transform;

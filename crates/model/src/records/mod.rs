pub mod meta;
pub mod row;

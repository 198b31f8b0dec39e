pub mod catalog;
pub mod fixtures;

pub mod collection;
pub mod error;
pub mod types;

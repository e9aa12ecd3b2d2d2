pub mod error;
pub mod generator;
pub mod store;
pub mod track;
pub mod validate;

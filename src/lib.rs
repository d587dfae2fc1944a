pub mod admin;
pub mod rows;
pub mod fields;
pub mod mirror;
pub mod quiz;
pub mod settings;

pub mod agenda;
pub mod config;
pub mod month;
pub mod select;

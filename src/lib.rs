pub mod commands;
pub mod components;
pub mod config;
pub mod error;
pub mod schema;
pub mod startup;
pub mod utils;

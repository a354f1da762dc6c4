pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod utils;
pub mod viewer;

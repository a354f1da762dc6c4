pub mod commands;
pub mod history;
pub mod report;

pub use commands::{Cli, Commands, GlobalOpts};

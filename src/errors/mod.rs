pub mod types;

pub use types::LumeraError;

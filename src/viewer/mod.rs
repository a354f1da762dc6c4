pub mod derive;
pub mod render;
pub mod state;

pub use state::{LoadTicket, ViewState, Viewer};

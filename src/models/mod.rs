pub mod envelope;
pub mod product;
pub mod report;

pub use envelope::*;
pub use product::*;
pub use report::*;

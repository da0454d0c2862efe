pub mod calculations;
pub mod models;

pub use calculations::{TaxEngine, TaxEngineError};
pub use models::*;

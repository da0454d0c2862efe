pub mod app;
pub mod csv_loader;
pub mod logging;
pub mod prompt;
pub mod summary;
pub mod utils;

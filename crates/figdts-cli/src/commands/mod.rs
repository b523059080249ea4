pub mod check;
pub mod error;
pub mod generate;
pub mod loader;
pub mod run_common;

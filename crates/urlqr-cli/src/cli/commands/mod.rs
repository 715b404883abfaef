//! CLI command handlers.

mod generate;

pub use generate::run_generate;

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod gazetteer;
pub mod output;
pub mod pipeline;

pub use error::{ReportError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

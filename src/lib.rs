pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod linter;
pub mod output;
pub mod scanner;

#[cfg(test)]
mod test_fixtures;

pub use error::{Result, WrapGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LINTS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

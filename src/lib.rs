pub mod cli;
pub mod config;
pub mod error;
pub mod forge;
pub mod macros;
pub mod notes;
pub mod performer;
pub mod resolver;
pub mod result;

pub use performer::{Outcome, execute, perform, perform_with};
pub use result::Result;

#[cfg(test)]
pub mod test_helpers;

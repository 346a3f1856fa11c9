//! Result type shared by every fallible operation in release-performer.
//!
//! Errors are reported through `color-eyre`, so any error type that
//! implements `std::error::Error` (octocrab, toml, tera and the crate's own
//! [`PerformerError`](crate::error::PerformerError)) converts with `?` and
//! can pick up extra context via `.wrap_err()`.
//!
//! ```rust,ignore
//! use color_eyre::eyre::Context;
//! use crate::result::Result;
//!
//! fn read_config(path: &Path) -> Result<String> {
//!     let content = std::fs::read_to_string(path)
//!         .wrap_err("failed to read configuration file")?;
//!     Ok(content)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout release-performer.
pub type Result<T> = EyreResult<T>;

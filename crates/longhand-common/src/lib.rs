//! Shared diagnostics for the longhand engine.
//!
//! - **Warning System** - deduplicated, colored stderr output for inputs the
//!   engine declines to handle (unknown shorthands, rejected declarations)

pub mod warning;

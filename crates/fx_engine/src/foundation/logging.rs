//! Logging utilities
//!
//! The library logs through the `log` facade; binaries pick the
//! implementation. Decorative effects are never load-bearing, so nothing in
//! this crate logs above `info!`.

pub use log::{debug, error, info, trace, warn};

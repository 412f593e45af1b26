//! Public API for the halftone-engine crate.
//!
//! This module provides the high-level API: [`HalftoneEngine`] builder and
//! the [`HalftoneError`] / [`ConfigError`] error types.

mod builder;
mod error;

pub use builder::HalftoneEngine;
pub use error::{ConfigError, HalftoneError};

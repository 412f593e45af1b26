//! Halftone - print-style halftoning for PNG images
//!
//! Command-line front end for the `halftone-engine` crate.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

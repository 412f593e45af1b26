//! halftone-engine: print-style halftoning for 8-bit pixel buffers
//!
//! This library converts continuous-tone images into halftoned or dithered
//! approximations that use only a few output levels per channel, the way
//! a printing press reproduces a photograph with dots of ink.
//!
//! # Quick Start
//!
//! The [`HalftoneEngine`] builder is the primary entry point:
//!
//! ```
//! use halftone_engine::{HalftoneEngine, PixelBuffer, Strategy};
//!
//! let mut buffer = PixelBuffer::filled(26, 26, 3, 128).unwrap();
//!
//! let engine = HalftoneEngine::new(Strategy::Dot).block_size(13);
//! engine.apply(&mut buffer).unwrap();
//!
//! assert_eq!(buffer.width(), 26);
//! ```
//!
//! # Screening Strategies
//!
//! Three strategies are available via [`Strategy`]:
//!
//! - **Dot** (default): amplitude-modulated circular dots, one per block.
//!   Darker blocks get bigger dots filled with the block mean on a white
//!   background.
//! - **Threshold**: every block becomes solid black or solid white.
//! - **Diffusion**: per-pixel Floyd-Steinberg error diffusion to black and
//!   white.
//!
//! Each strategy processes one channel at a time through the [`Screen`]
//! trait; channels never interact.
//!
//! # Color Models
//!
//! With [`ColorModel::Direct`] the buffer's own channels are screened. With
//! [`ColorModel::Separated`] an RGB buffer is first split into four
//! subtractive ink channels (three inks plus a key), those are screened,
//! and the result is recombined:
//!
//! ```text
//! RGB buffer
//!     |
//!     v
//! ColorSeparator::to_separated     (k = min(1-r, 1-g, 1-b), rounded)
//!     |
//!     v
//! Screen S0, S1, S2, S3            (per selected channel)
//!     |
//!     v
//! ColorSeparator::to_direct        (truncated, clamped)
//!     |
//!     v
//! RGB buffer
//! ```
//!
//! Separation and recombination round to 8 bits on each side, so even an
//! unscreened round trip is only exact to within one level.
//!
//! # Ordering
//!
//! | Screener | Within a channel | Across channels |
//! |----------|------------------|-----------------|
//! | [`ThresholdScreener`] | blocks independent | independent |
//! | [`DotRenderer`] | raster order, later dots overwrite earlier | independent |
//! | [`ErrorDiffuser`] | strict raster order (error chain) | independent |
//!
//! All passes run sequentially and are fully deterministic.
//!
//! # Error Diffusion Accumulation
//!
//! [`Accumulation::Wide`] (default) carries propagated error in 32-bit
//! signed integers. [`Accumulation::ByteWrap`] wraps every addition modulo
//! 256, reproducing the artifact of byte-buffer implementations where an
//! over-bright pixel wraps around to black.

pub mod api;
pub mod buffer;
pub mod color;
pub mod screen;


pub use api::{ConfigError, HalftoneEngine, HalftoneError};
pub use buffer::{BufferError, PixelBuffer};
pub use color::{ColorModel, ColorSeparator, Ink};
pub use screen::{
    Accumulation, BlockSampler, DotRenderer, ErrorDiffuser, Screen, Strategy, ThresholdScreener,
};

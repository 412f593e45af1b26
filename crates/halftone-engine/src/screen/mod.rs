//! Screening algorithms.
//!
//! This module provides the three ways a channel can be reduced to a
//! handful of output levels:
//!
//! - **Dot** ([`DotRenderer`]): amplitude-modulated circular dots, one per block
//! - **Threshold** ([`ThresholdScreener`]): each block becomes solid black or white
//! - **Diffusion** ([`ErrorDiffuser`]): per-pixel Floyd-Steinberg error diffusion
//!
//! # Architecture
//!
//! All screeners implement the [`Screen`] trait, which processes one channel
//! of a [`PixelBuffer`] in place. [`Strategy`] selects the screener at
//! configuration time; the two block-based screeners share [`BlockGrid`]
//! and [`BlockSampler`].
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use halftone_engine::PixelBuffer;
//! use halftone_engine::screen::{Screen, ThresholdScreener};
//!
//! let mut buffer = PixelBuffer::filled(4, 4, 1, 100).unwrap();
//! let screener = ThresholdScreener::new(NonZeroUsize::new(2).unwrap());
//! screener.apply(&mut buffer, 0).unwrap();
//!
//! assert!(buffer.samples().iter().all(|&v| v == 0));
//! ```

mod block;
mod dot;
mod floyd_steinberg;
mod threshold;

pub use block::{Block, BlockGrid, BlockSampler};
pub use dot::DotRenderer;
pub use floyd_steinberg::{Accumulation, ErrorDiffuser};
pub use threshold::ThresholdScreener;

use crate::buffer::{BufferError, PixelBuffer};

/// Samples below this value quantize to black, the rest to white.
pub const THRESHOLD: i32 = 128;

/// Screening strategy selection for the [`HalftoneEngine`](crate::HalftoneEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Amplitude-modulated circular dots ([`DotRenderer`]).
    #[default]
    Dot,

    /// Binary block thresholding ([`ThresholdScreener`]).
    Threshold,

    /// Floyd-Steinberg error diffusion ([`ErrorDiffuser`]).
    ///
    /// Works per pixel; the block size is ignored.
    Diffusion,
}

impl Strategy {
    /// Whether this strategy partitions the buffer into blocks.
    #[inline]
    pub fn uses_blocks(self) -> bool {
        !matches!(self, Strategy::Diffusion)
    }

    /// Default block edge for the strategy.
    ///
    /// Dots need room to grow, so they default to 13; threshold and
    /// diffusion default to per-pixel operation.
    pub fn default_block_size(self) -> usize {
        match self {
            Strategy::Dot => 13,
            Strategy::Threshold | Strategy::Diffusion => 1,
        }
    }
}

/// Trait for single-channel screening algorithms.
///
/// Implementors quantize one channel of a buffer in place and leave every
/// other channel untouched. A bounds failure aborts the pass; samples
/// written before the failure stay written.
pub trait Screen {
    /// Screen `channel` of `buffer` in place.
    fn apply(&self, buffer: &mut PixelBuffer, channel: usize) -> Result<(), BufferError>;
}

/// Quantize a (possibly out-of-range) working value to 0 or 255.
#[inline]
pub(crate) fn binarize(value: i32) -> u8 {
    if value < THRESHOLD {
        0
    } else {
        255
    }
}

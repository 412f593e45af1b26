//! Amplitude-modulated circular dot screening.
//!
//! Each block becomes a round dot whose radius grows as the block gets
//! darker. The dot is filled with the block mean; the rest of its window
//! is painted white.

use std::num::NonZeroUsize;

use super::block::{BlockGrid, BlockSampler};
use super::Screen;
use crate::buffer::{BufferError, PixelBuffer};

/// Background written outside a dot.
const PAPER_WHITE: i32 = 255;

/// Circular halftone dot renderer.
///
/// # Algorithm
///
/// For every block, in raster order:
///
/// 1. `avg` = block mean of the channel, `brightness = avg / 255`
/// 2. `max_radius = floor(S / 2)`,
///    `radius = max(1, max_radius * (1 - brightness))`
/// 3. Every pixel inside the `(2 * max_radius + 1)` square window centred on
///    the block's **top-left anchor** is set to `avg` if it lies within
///    `radius` of the anchor, otherwise to white.
///
/// # Raster Precedence
///
/// The window reaches up to `max_radius` pixels into neighbouring blocks.
/// Blocks are processed strictly in raster order and later blocks
/// overwrite earlier ones where windows overlap: the last writer wins.
/// A block's mean is read from the buffer as it stands when the block is
/// visited, so it already includes pixels painted by earlier dots. The
/// pass is therefore sequential within a channel; channels are
/// independent of each other.
///
/// With `S = 1` the window is the anchor pixel alone and each pixel is
/// rewritten with its own value.
#[derive(Debug, Clone, Copy)]
pub struct DotRenderer {
    block_size: NonZeroUsize,
}

impl DotRenderer {
    /// Create a dot renderer with block edge `block_size`.
    pub fn new(block_size: NonZeroUsize) -> Self {
        Self { block_size }
    }

    /// Half-width of the paint window, `floor(S / 2)`.
    #[inline]
    pub fn max_radius(&self) -> usize {
        self.block_size.get() / 2
    }

    /// Dot radius for a block mean.
    ///
    /// Never below one pixel, so even white blocks keep a single-pixel
    /// dot at their anchor.
    pub fn radius_for(&self, avg: u8) -> f32 {
        let brightness = avg as f32 / 255.0;
        (self.max_radius() as f32 * (1.0 - brightness)).max(1.0)
    }
}

impl Screen for DotRenderer {
    fn apply(&self, buffer: &mut PixelBuffer, channel: usize) -> Result<(), BufferError> {
        let width = buffer.width();
        let height = buffer.height();
        let max_radius = self.max_radius();

        for block in BlockGrid::for_buffer(buffer, self.block_size) {
            let avg = BlockSampler::mean(buffer, &block, channel)?;
            let radius = self.radius_for(avg);
            let radius_sq = radius * radius;

            let x_start = block.x.saturating_sub(max_radius);
            let x_end = (block.x + max_radius).min(width - 1);
            let y_start = block.y.saturating_sub(max_radius);
            let y_end = (block.y + max_radius).min(height - 1);

            for py in y_start..=y_end {
                let dy = py as i64 - block.y as i64;
                for px in x_start..=x_end {
                    let dx = px as i64 - block.x as i64;
                    let dist_sq = (dx * dx + dy * dy) as f32;
                    let value = if dist_sq <= radius_sq {
                        avg as i32
                    } else {
                        PAPER_WHITE
                    };
                    buffer.set(px, py, channel, value)?;
                }
            }
        }

        Ok(())
    }
}

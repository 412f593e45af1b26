//! Block grid partitioning and per-block sampling.
//!
//! Block-based screeners divide the buffer into `S x S` tiles anchored at
//! multiples of the block size. Tiles on the right and bottom edges are
//! clipped to the buffer, so the grid always partitions the buffer exactly.

use std::num::NonZeroUsize;

use crate::buffer::{BufferError, PixelBuffer};

/// An axis-aligned rectangle of pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Left column (the anchor x)
    pub x: usize,
    /// Top row (the anchor y)
    pub y: usize,
    /// Width in pixels (may be less than the block size at the right edge)
    pub width: usize,
    /// Height in pixels (may be less than the block size at the bottom edge)
    pub height: usize,
}

impl Block {
    /// Create a block from its top-left anchor and extent.
    #[inline]
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A single block covering the whole buffer.
    pub fn covering(buffer: &PixelBuffer) -> Self {
        Self::new(0, 0, buffer.width(), buffer.height())
    }

    /// Number of pixels inside the block.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Iterate the block's pixel coordinates in raster order.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> {
        let Block {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height).flat_map(move |py| (x..x + width).map(move |px| (px, py)))
    }
}

/// Raster-order iterator over the clipped block grid of a buffer.
///
/// Yields blocks by increasing row, then increasing column. There are
/// `ceil(width / size) * ceil(height / size)` blocks.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use halftone_engine::screen::{Block, BlockGrid};
///
/// let size = NonZeroUsize::new(2).unwrap();
/// let blocks: Vec<Block> = BlockGrid::new(3, 2, size).collect();
///
/// assert_eq!(blocks, vec![Block::new(0, 0, 2, 2), Block::new(2, 0, 1, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct BlockGrid {
    width: usize,
    height: usize,
    size: usize,
    next_x: usize,
    next_y: usize,
}

impl BlockGrid {
    /// Create the grid for a `width x height` buffer with block edge `size`.
    pub fn new(width: usize, height: usize, size: NonZeroUsize) -> Self {
        Self {
            width,
            height,
            size: size.get(),
            next_x: 0,
            next_y: 0,
        }
    }

    /// Grid over the full extent of `buffer`.
    pub fn for_buffer(buffer: &PixelBuffer, size: NonZeroUsize) -> Self {
        Self::new(buffer.width(), buffer.height(), size)
    }
}

impl Iterator for BlockGrid {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.width == 0 || self.next_y >= self.height {
            return None;
        }

        let block = Block::new(
            self.next_x,
            self.next_y,
            self.size.min(self.width - self.next_x),
            self.size.min(self.height - self.next_y),
        );

        self.next_x += self.size;
        if self.next_x >= self.width {
            self.next_x = 0;
            self.next_y += self.size;
        }

        Some(block)
    }
}

/// Computes per-block channel means.
pub struct BlockSampler;

impl BlockSampler {
    /// Integer mean of `channel` over every pixel in `block`.
    ///
    /// Divides by the number of pixels actually inside the block (so
    /// clipped edge blocks are not diluted) and truncates toward zero.
    /// Fails if the block reaches outside the buffer or is empty.
    pub fn mean(buffer: &PixelBuffer, block: &Block, channel: usize) -> Result<u8, BufferError> {
        let count = block.pixel_count();
        if count == 0 {
            return Err(BufferError::EmptyBlock);
        }

        let mut sum: u64 = 0;
        for (x, y) in block.pixels() {
            sum += buffer.get(x, y, channel)? as u64;
        }

        // A mean of u8 samples always fits in u8
        Ok((sum / count as u64) as u8)
    }
}

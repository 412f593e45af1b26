//! Binary block threshold screening.

use std::num::NonZeroUsize;

use super::block::{BlockGrid, BlockSampler};
use super::{binarize, Screen};
use crate::buffer::{BufferError, PixelBuffer};

/// Replaces each block with solid black or white based on its mean.
///
/// A block whose mean is below 128 becomes 0, otherwise 255. Blocks never
/// overlap, so the result does not depend on visiting order. With `S = 1`
/// this is plain per-pixel thresholding.
///
/// Run on each of three RGB channels this yields one of eight colors per
/// block; run on a separated buffer it screens each ink independently.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdScreener {
    block_size: NonZeroUsize,
}

impl ThresholdScreener {
    /// Create a threshold screener with block edge `block_size`.
    pub fn new(block_size: NonZeroUsize) -> Self {
        Self { block_size }
    }
}

impl Screen for ThresholdScreener {
    fn apply(&self, buffer: &mut PixelBuffer, channel: usize) -> Result<(), BufferError> {
        for block in BlockGrid::for_buffer(buffer, self.block_size) {
            let avg = BlockSampler::mean(buffer, &block, channel)?;
            let value = binarize(avg as i32) as i32;
            for (x, y) in block.pixels() {
                buffer.set(x, y, channel, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screener(size: usize) -> ThresholdScreener {
        ThresholdScreener::new(NonZeroUsize::new(size).unwrap())
    }

    #[test]
    fn test_uniform_dark_block_goes_black() {
        let mut buffer = PixelBuffer::filled(4, 4, 1, 100).unwrap();
        screener(2).apply(&mut buffer, 0).unwrap();
        assert!(buffer.samples().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_threshold_boundary() {
        let mut buffer = PixelBuffer::from_samples(vec![127, 128, 0, 255], 4, 1, 1).unwrap();
        screener(1).apply(&mut buffer, 0).unwrap();
        assert_eq!(buffer.samples(), &[0, 255, 0, 255]);
    }

    #[test]
    fn test_output_is_binary() {
        let samples: Vec<u8> = (0..=255).collect();
        let mut buffer = PixelBuffer::from_samples(samples, 16, 16, 1).unwrap();
        screener(3).apply(&mut buffer, 0).unwrap();
        assert!(buffer.samples().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_whole_block_shares_one_value() {
        // Block mean (0 + 255 + 255 + 255) / 4 = 191 -> white
        let mut buffer = PixelBuffer::from_samples(vec![0, 255, 255, 255], 2, 2, 1).unwrap();
        screener(2).apply(&mut buffer, 0).unwrap();
        assert_eq!(buffer.samples(), &[255, 255, 255, 255]);
    }

    #[test]
    fn test_only_selected_channel_changes() {
        let mut buffer = PixelBuffer::from_samples(vec![200, 50, 90], 1, 1, 3).unwrap();
        screener(1).apply(&mut buffer, 1).unwrap();
        assert_eq!(buffer.samples(), &[200, 0, 90]);
    }
}

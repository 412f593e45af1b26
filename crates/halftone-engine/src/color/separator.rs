//! Buffer-level conversion between direct RGB and separated ink channels.

use super::ink::Ink;
use crate::buffer::{BufferError, PixelBuffer};

/// Channel count of a separated buffer (S0..S3).
pub const SEPARATED_CHANNELS: usize = 4;

/// Channel count of a direct RGB buffer.
pub const RGB_CHANNELS: usize = 3;

/// Converts whole buffers between RGB and the four-channel ink model.
///
/// The separated buffer is an intermediate: it is created by
/// [`to_separated()`](Self::to_separated), screened, and consumed by
/// [`to_direct()`](Self::to_direct).
///
/// # Example
///
/// ```
/// use halftone_engine::{ColorSeparator, PixelBuffer};
///
/// let rgb = PixelBuffer::from_samples(vec![255, 0, 0], 1, 1, 3).unwrap();
/// let separated = ColorSeparator::to_separated(&rgb).unwrap();
/// assert_eq!(separated.samples(), &[0, 255, 255, 0]);
///
/// let back = ColorSeparator::to_direct(&separated).unwrap();
/// assert_eq!(back.samples(), &[255, 0, 0]);
/// ```
pub struct ColorSeparator;

impl ColorSeparator {
    /// Separate a 3-channel RGB buffer into a 4-channel ink buffer of the
    /// same width and height.
    pub fn to_separated(rgb: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
        expect_channels(rgb, RGB_CHANNELS)?;

        let samples = rgb
            .samples()
            .chunks_exact(RGB_CHANNELS)
            .flat_map(|px| Ink::from_rgb_u8(px[0], px[1], px[2]).to_bytes())
            .collect();

        PixelBuffer::from_samples(samples, rgb.width(), rgb.height(), SEPARATED_CHANNELS)
    }

    /// Recombine a 4-channel ink buffer into a 3-channel RGB buffer of the
    /// same width and height.
    pub fn to_direct(separated: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
        expect_channels(separated, SEPARATED_CHANNELS)?;

        let samples = separated
            .samples()
            .chunks_exact(SEPARATED_CHANNELS)
            .flat_map(|px| Ink::from_bytes([px[0], px[1], px[2], px[3]]).to_rgb_u8())
            .collect();

        PixelBuffer::from_samples(samples, separated.width(), separated.height(), RGB_CHANNELS)
    }
}

fn expect_channels(buffer: &PixelBuffer, expected: usize) -> Result<(), BufferError> {
    if buffer.channels() != expected {
        return Err(BufferError::ChannelLayout {
            expected,
            actual: buffer.channels(),
        });
    }
    Ok(())
}

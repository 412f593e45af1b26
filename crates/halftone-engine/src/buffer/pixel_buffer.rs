//! Owned, bounds-checked 8-bit pixel grid.

use super::BufferError;

/// An interleaved, row-major grid of 8-bit samples.
///
/// The sample for `(x, y, channel)` lives at linear index
/// `(y * width + x) * channels + channel`. The shape is fixed at
/// construction; screening passes mutate samples in place and never
/// resize the buffer.
///
/// # Write Policy
///
/// [`set()`](PixelBuffer::set) takes an `i32` and **rejects** values outside
/// `[0, 255]` with [`BufferError::ValueOutOfRange`]. Nothing is clamped on
/// write.
///
/// # Example
///
/// ```
/// use halftone_engine::PixelBuffer;
///
/// let mut buffer = PixelBuffer::new(2, 2, 1).unwrap();
/// buffer.set(1, 0, 0, 200).unwrap();
///
/// assert_eq!(buffer.get(1, 0, 0).unwrap(), 200);
/// assert!(buffer.set(1, 0, 0, 256).is_err());
/// assert!(buffer.get(2, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    samples: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self, BufferError> {
        Self::filled(width, height, channels, 0)
    }

    /// Create a buffer with every sample set to `value`.
    pub fn filled(
        width: usize,
        height: usize,
        channels: usize,
        value: u8,
    ) -> Result<Self, BufferError> {
        check_channels(channels)?;
        Ok(Self {
            samples: vec![value; width * height * channels],
            width,
            height,
            channels,
        })
    }

    /// Wrap existing interleaved samples.
    ///
    /// `samples.len()` must equal `width * height * channels`.
    pub fn from_samples(
        samples: Vec<u8>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, BufferError> {
        check_channels(channels)?;
        let expected = width * height * channels;
        if samples.len() != expected {
            return Err(BufferError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            samples,
            width,
            height,
            channels,
        })
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of interleaved channels per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns all samples in storage order.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the buffer, returning its samples.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Read one sample.
    #[inline]
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Result<u8, BufferError> {
        let idx = self.index(x, y, channel)?;
        Ok(self.samples[idx])
    }

    /// Write one sample.
    ///
    /// Fails with [`BufferError::OutOfRange`] for a bad coordinate or
    /// channel and with [`BufferError::ValueOutOfRange`] if `value` is not
    /// in `[0, 255]`. On failure the buffer is unchanged.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: i32) -> Result<(), BufferError> {
        let idx = self.index(x, y, channel)?;
        let sample = u8::try_from(value).map_err(|_| BufferError::ValueOutOfRange { value })?;
        self.samples[idx] = sample;
        Ok(())
    }

    /// Copy one channel out as a row-major plane of `width * height` samples.
    pub fn channel_plane(&self, channel: usize) -> Result<Vec<u8>, BufferError> {
        if channel >= self.channels {
            return Err(self.out_of_range(0, 0, channel));
        }
        Ok(self
            .samples
            .iter()
            .skip(channel)
            .step_by(self.channels)
            .copied()
            .collect())
    }

    fn index(&self, x: usize, y: usize, channel: usize) -> Result<usize, BufferError> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return Err(self.out_of_range(x, y, channel));
        }
        Ok((y * self.width + x) * self.channels + channel)
    }

    fn out_of_range(&self, x: usize, y: usize, channel: usize) -> BufferError {
        BufferError::OutOfRange {
            x,
            y,
            channel,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}

fn check_channels(channels: usize) -> Result<(), BufferError> {
    match channels {
        1 | 3 | 4 => Ok(()),
        _ => Err(BufferError::InvalidChannelCount { channels }),
    }
}

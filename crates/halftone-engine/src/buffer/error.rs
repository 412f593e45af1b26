//! Error types for pixel buffer access
//!
//! Every coordinate, channel, and sample value that crosses the
//! [`PixelBuffer`](super::PixelBuffer) boundary is checked; violations are
//! reported through [`BufferError`].

use std::fmt;

/// Error type for pixel buffer construction and access.
///
/// Out-of-range access is always a programming error in the caller. The
/// screening passes propagate it immediately and abort; no rollback of
/// samples already written is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Coordinate or channel index outside the buffer bounds
    OutOfRange {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Requested channel
        channel: usize,
        /// Buffer width
        width: usize,
        /// Buffer height
        height: usize,
        /// Buffer channel count
        channels: usize,
    },
    /// Sample value outside `[0, 255]` passed to a write
    ValueOutOfRange {
        /// The rejected value
        value: i32,
    },
    /// Channel count other than 1, 3 or 4
    InvalidChannelCount {
        /// The rejected channel count
        channels: usize,
    },
    /// Sample vector length does not equal `width * height * channels`
    SampleCountMismatch {
        /// Length implied by the shape
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// Operation requires a specific channel layout
    ChannelLayout {
        /// Channel count the operation needs
        expected: usize,
        /// Channel count of the buffer it was given
        actual: usize,
    },
    /// A block with no pixels was sampled
    EmptyBlock,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::OutOfRange {
                x,
                y,
                channel,
                width,
                height,
                channels,
            } => write!(
                f,
                "sample ({}, {}, channel {}) out of range for {}x{} buffer with {} channels",
                x, y, channel, width, height, channels
            ),
            BufferError::ValueOutOfRange { value } => {
                write!(f, "sample value {} outside [0, 255]", value)
            }
            BufferError::InvalidChannelCount { channels } => {
                write!(f, "unsupported channel count {} (expected 1, 3 or 4)", channels)
            }
            BufferError::SampleCountMismatch { expected, actual } => {
                write!(
                    f,
                    "sample count mismatch: shape needs {} samples, got {}",
                    expected, actual
                )
            }
            BufferError::ChannelLayout { expected, actual } => {
                write!(
                    f,
                    "channel layout mismatch: expected {} channels, buffer has {}",
                    expected, actual
                )
            }
            BufferError::EmptyBlock => write!(f, "cannot sample an empty block"),
        }
    }
}

impl std::error::Error for BufferError {}

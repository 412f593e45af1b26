//! Error types for the halftone-engine public API.
//!
//! [`ConfigError`] reports bad engine options and is raised before any
//! pixel is touched. [`HalftoneError`] wraps it together with
//! [`BufferError`] for convenient `?` propagation in application code.

use crate::buffer::BufferError;
use std::fmt;

/// Error type for invalid engine configuration.
///
/// Returned by [`HalftoneEngine::validate()`](crate::HalftoneEngine::validate)
/// and by [`HalftoneEngine::apply()`](crate::HalftoneEngine::apply) before
/// the buffer is modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Block size below 1 for a block-based strategy
    InvalidBlockSize {
        /// The rejected block size
        size: usize,
    },
    /// Separated color model requested for a buffer that is not RGB
    SeparationRequiresRgb {
        /// Channel count of the buffer
        channels: usize,
    },
    /// Selected channel does not exist in the working buffer
    ChannelOutOfRange {
        /// The requested channel index
        channel: usize,
        /// Channels available in the working buffer
        available: usize,
    },
    /// Explicit channel selection with no channels in it
    EmptyChannelSet,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBlockSize { size } => {
                write!(f, "invalid block size {} (must be at least 1)", size)
            }
            ConfigError::SeparationRequiresRgb { channels } => {
                write!(
                    f,
                    "separated color model requires a 3-channel buffer, got {} channels",
                    channels
                )
            }
            ConfigError::ChannelOutOfRange { channel, available } => {
                write!(
                    f,
                    "channel {} out of range (working buffer has {} channels)",
                    channel, available
                )
            }
            ConfigError::EmptyChannelSet => write!(f, "channel selection is empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Unified error type for the halftone-engine public API.
///
/// # Example
///
/// ```
/// use halftone_engine::{HalftoneEngine, HalftoneError, PixelBuffer, Strategy};
///
/// fn screen(buffer: &mut PixelBuffer) -> Result<(), HalftoneError> {
///     HalftoneEngine::new(Strategy::Threshold).apply(buffer)?;
///     Ok(())
/// }
///
/// let mut buffer = PixelBuffer::new(2, 2, 1)?;
/// screen(&mut buffer).unwrap();
/// # Ok::<(), halftone_engine::BufferError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HalftoneError {
    /// Engine configuration rejected before processing
    Config(ConfigError),
    /// Buffer access failed during processing
    Buffer(BufferError),
}

impl fmt::Display for HalftoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalftoneError::Config(err) => write!(f, "invalid configuration: {}", err),
            HalftoneError::Buffer(err) => write!(f, "buffer error: {}", err),
        }
    }
}

impl std::error::Error for HalftoneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HalftoneError::Config(err) => Some(err),
            HalftoneError::Buffer(err) => Some(err),
        }
    }
}

impl From<ConfigError> for HalftoneError {
    fn from(err: ConfigError) -> Self {
        HalftoneError::Config(err)
    }
}

impl From<BufferError> for HalftoneError {
    fn from(err: BufferError) -> Self {
        HalftoneError::Buffer(err)
    }
}

//! HalftoneEngine builder -- the primary entry point for the crate.
//!
//! [`HalftoneEngine`] selects a screening strategy and color model, then
//! drives the chosen [`Screen`] over each selected channel of a buffer.

use std::num::NonZeroUsize;

use super::error::{ConfigError, HalftoneError};
use crate::buffer::PixelBuffer;
use crate::color::{ColorModel, ColorSeparator, RGB_CHANNELS, SEPARATED_CHANNELS};
use crate::screen::{
    Accumulation, DotRenderer, ErrorDiffuser, Screen, Strategy, ThresholdScreener,
};

/// High-level halftoning engine.
///
/// # Design
///
/// - Constructor requires a [`Strategy`]; everything else has defaults
/// - Configuration methods consume and return `self`
/// - [`apply()`](Self::apply) takes `&self`, so one engine can screen many
///   buffers
/// - All options are validated against the buffer before any sample is
///   written, so a configuration error never leaves a half-processed buffer
///
/// # Pipeline
///
/// 1. Validate options against the buffer shape
/// 2. With [`ColorModel::Separated`], split RGB into four ink channels
/// 3. Screen each selected channel, lowest index first
/// 4. With [`ColorModel::Separated`], recombine into RGB
///
/// # Example
///
/// ```
/// use halftone_engine::{ColorModel, HalftoneEngine, PixelBuffer, Strategy};
///
/// let mut buffer = PixelBuffer::filled(8, 8, 3, 90).unwrap();
///
/// HalftoneEngine::new(Strategy::Threshold)
///     .block_size(4)
///     .color_model(ColorModel::Separated)
///     .apply(&mut buffer)
///     .unwrap();
///
/// assert_eq!(buffer.channels(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct HalftoneEngine {
    strategy: Strategy,
    block_size: usize,
    color_model: ColorModel,
    channels: Option<Vec<usize>>,
    accumulation: Accumulation,
    /// Whether block_size was explicitly set by the user (vs strategy default).
    block_size_explicit: bool,
}

impl HalftoneEngine {
    /// Create an engine for `strategy` with its default block size, the
    /// direct color model, all channels, and wide error accumulation.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            block_size: strategy.default_block_size(),
            color_model: ColorModel::Direct,
            channels: None,
            accumulation: Accumulation::Wide,
            block_size_explicit: false,
        }
    }

    /// Set the screening strategy.
    ///
    /// Resets the block size to the strategy default unless it was set
    /// explicitly.
    #[inline]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        if !self.block_size_explicit {
            self.block_size = strategy.default_block_size();
        }
        self
    }

    /// Set the block edge in pixels. Ignored by diffusion.
    #[inline]
    pub fn block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self.block_size_explicit = true;
        self
    }

    /// Set the color model.
    #[inline]
    pub fn color_model(mut self, model: ColorModel) -> Self {
        self.color_model = model;
        self
    }

    /// Restrict processing to the given channel indices.
    ///
    /// Indices refer to the working buffer: the input channels for
    /// [`ColorModel::Direct`], S0..S3 for [`ColorModel::Separated`].
    /// Duplicates are ignored; channels are processed in ascending order.
    pub fn channels(mut self, channels: &[usize]) -> Self {
        let mut selected = channels.to_vec();
        selected.sort_unstable();
        selected.dedup();
        self.channels = Some(selected);
        self
    }

    /// Process every channel of the working buffer (the default).
    #[inline]
    pub fn all_channels(mut self) -> Self {
        self.channels = None;
        self
    }

    /// Set the error diffusion accumulation policy.
    #[inline]
    pub fn accumulation(mut self, accumulation: Accumulation) -> Self {
        self.accumulation = accumulation;
        self
    }

    /// Check the configuration against `buffer` without touching it.
    ///
    /// Returns the channel indices that [`apply()`](Self::apply) would
    /// process.
    pub fn validate(&self, buffer: &PixelBuffer) -> Result<Vec<usize>, ConfigError> {
        if self.strategy.uses_blocks() && self.block_size < 1 {
            return Err(ConfigError::InvalidBlockSize {
                size: self.block_size,
            });
        }

        let available = match self.color_model {
            ColorModel::Direct => buffer.channels(),
            ColorModel::Separated => {
                if buffer.channels() != RGB_CHANNELS {
                    return Err(ConfigError::SeparationRequiresRgb {
                        channels: buffer.channels(),
                    });
                }
                SEPARATED_CHANNELS
            }
        };

        match &self.channels {
            None => Ok((0..available).collect()),
            Some(selected) if selected.is_empty() => Err(ConfigError::EmptyChannelSet),
            Some(selected) => {
                if let Some(&channel) = selected.iter().find(|&&ch| ch >= available) {
                    return Err(ConfigError::ChannelOutOfRange { channel, available });
                }
                Ok(selected.clone())
            }
        }
    }

    /// Screen `buffer` in place.
    ///
    /// Configuration errors are reported before any sample changes. A
    /// buffer error mid-pass aborts and leaves the buffer partially
    /// processed.
    pub fn apply(&self, buffer: &mut PixelBuffer) -> Result<(), HalftoneError> {
        let channels = self.validate(buffer)?;
        let screener = self.screener()?;

        match self.color_model {
            ColorModel::Direct => {
                for &channel in &channels {
                    screener.apply(buffer, channel)?;
                }
            }
            ColorModel::Separated => {
                let mut separated = ColorSeparator::to_separated(buffer)?;
                for &channel in &channels {
                    screener.apply(&mut separated, channel)?;
                }
                *buffer = ColorSeparator::to_direct(&separated)?;
            }
        }

        Ok(())
    }

    /// Build the screener for the configured strategy.
    fn screener(&self) -> Result<Box<dyn Screen>, ConfigError> {
        if !self.strategy.uses_blocks() {
            return Ok(Box::new(ErrorDiffuser::new(self.accumulation)));
        }

        let size = NonZeroUsize::new(self.block_size).ok_or(ConfigError::InvalidBlockSize {
            size: self.block_size,
        })?;
        Ok(match self.strategy {
            Strategy::Dot => Box::new(DotRenderer::new(size)),
            Strategy::Threshold => Box::new(ThresholdScreener::new(size)),
            Strategy::Diffusion => Box::new(ErrorDiffuser::new(self.accumulation)),
        })
    }
}

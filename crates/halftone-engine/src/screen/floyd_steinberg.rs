//! Floyd-Steinberg error diffusion.
//!
//! Each pixel is thresholded to black or white and the quantization error
//! is pushed forward to the four unvisited neighbours. Every pixel depends
//! on errors from already-visited pixels, so a channel is processed strictly
//! in raster order. Separate channels share nothing and may be run in any
//! order.

use super::{binarize, Screen};
use crate::buffer::{BufferError, PixelBuffer};

/// Floyd-Steinberg kernel as `(dx, dy, weight)` over a divisor of 16.
///
/// ```text
///        X   7
///    3   5   1
/// ```
const FLOYD_STEINBERG: [(isize, usize, i32); 4] = [(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)];

const DIVISOR: i32 = 16;

/// How propagated error is accumulated into not-yet-visited pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accumulation {
    /// Accumulate in a signed 32-bit working plane.
    ///
    /// Working values may leave `[0, 255]` between visits; they are only
    /// thresholded, never clamped or wrapped. No overflow is possible for
    /// 8-bit input.
    #[default]
    Wide,

    /// Accumulate in 8-bit storage, wrapping modulo 256 after each addition.
    ///
    /// Compatibility mode that reproduces the wraparound artifact of
    /// byte-buffer implementations: a bright pixel pushed past 255 wraps to
    /// a dark value (and vice versa).
    ByteWrap,
}

impl Accumulation {
    #[inline]
    fn add(self, value: i32, delta: i32) -> i32 {
        match self {
            Accumulation::Wide => value + delta,
            Accumulation::ByteWrap => (value + delta).rem_euclid(256),
        }
    }
}

/// Single-channel Floyd-Steinberg error diffuser.
///
/// # Algorithm
///
/// Rows top to bottom, columns left to right:
///
/// ```text
/// old = working[x, y]
/// new = 0 if old < 128 else 255
/// err = old - new
/// working[x+1, y  ] += err * 7 / 16
/// working[x-1, y+1] += err * 3 / 16
/// working[x,   y+1] += err * 5 / 16
/// working[x+1, y+1] += err * 1 / 16
/// ```
///
/// Each term uses integer division truncating toward zero; neighbours
/// outside the buffer are skipped and their share of the error is lost.
/// The working plane is transient and lives for one pass over one channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorDiffuser {
    accumulation: Accumulation,
}

impl ErrorDiffuser {
    /// Create a diffuser with the given accumulation policy.
    pub fn new(accumulation: Accumulation) -> Self {
        Self { accumulation }
    }

    /// The accumulation policy in use.
    #[inline]
    pub fn accumulation(&self) -> Accumulation {
        self.accumulation
    }
}

impl Screen for ErrorDiffuser {
    fn apply(&self, buffer: &mut PixelBuffer, channel: usize) -> Result<(), BufferError> {
        let width = buffer.width();
        let height = buffer.height();

        let mut working: Vec<i32> = buffer
            .channel_plane(channel)?
            .into_iter()
            .map(i32::from)
            .collect();

        for y in 0..height {
            for x in 0..width {
                let idx = y * width + x;
                let old = working[idx];
                let new = binarize(old);
                working[idx] = new as i32;
                buffer.set(x, y, channel, new as i32)?;

                let error = old - new as i32;
                if error == 0 {
                    continue;
                }

                for &(dx, dy, weight) in &FLOYD_STEINBERG {
                    let Some(nx) = x.checked_add_signed(dx) else {
                        continue;
                    };
                    let ny = y + dy;
                    if nx >= width || ny >= height {
                        continue;
                    }
                    let nidx = ny * width + nx;
                    working[nidx] = self
                        .accumulation
                        .add(working[nidx], error * weight / DIVISOR);
                }
            }
        }

        Ok(())
    }
}

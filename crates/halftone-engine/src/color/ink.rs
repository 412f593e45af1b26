//! Four-channel subtractive ink color type
//!
//! An [`Ink`] holds three ink coverages plus a key (black) coverage, each
//! normalized to 0.0..=1.0. It is the per-pixel model behind
//! [`ColorSeparator`](super::ColorSeparator).

/// A color in the four-channel subtractive model.
///
/// Field names follow the complement of the additive channel they absorb:
/// `c` absorbs red, `m` absorbs green, `y` absorbs blue, `k` absorbs all
/// three equally. In a separated buffer they are stored in that order as
/// channels S0..S3. This is a storage layout, not a claim about press ink
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ink {
    /// Red-absorbing coverage (0.0..=1.0), stored as S0
    pub c: f64,
    /// Green-absorbing coverage (0.0..=1.0), stored as S1
    pub m: f64,
    /// Blue-absorbing coverage (0.0..=1.0), stored as S2
    pub y: f64,
    /// Key coverage shared by all channels (0.0..=1.0), stored as S3
    pub k: f64,
}

impl Ink {
    /// Create an ink color from normalized coverages.
    #[inline]
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Separate an 8-bit RGB color.
    ///
    /// The key takes the common part of the three complements; the
    /// remaining coverage of each ink is rescaled by `1 - k`. Pure black
    /// (`k == 1`) carries no chromatic ink at all.
    ///
    /// # Example
    /// ```
    /// use halftone_engine::Ink;
    ///
    /// let red = Ink::from_rgb_u8(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [0, 255, 255, 0]);
    ///
    /// let black = Ink::from_rgb_u8(0, 0, 0);
    /// assert_eq!(black.to_bytes(), [0, 0, 0, 255]);
    /// ```
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        let c = 1.0 - r as f64 / 255.0;
        let m = 1.0 - g as f64 / 255.0;
        let y = 1.0 - b as f64 / 255.0;
        let k = c.min(m).min(y);

        if k < 1.0 {
            let scale = 1.0 - k;
            Self {
                c: (c - k) / scale,
                m: (m - k) / scale,
                y: (y - k) / scale,
                k,
            }
        } else {
            Self::new(0.0, 0.0, 0.0, k)
        }
    }

    /// Create an ink color from stored 8-bit samples `[S0, S1, S2, S3]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            c: bytes[0] as f64 / 255.0,
            m: bytes[1] as f64 / 255.0,
            y: bytes[2] as f64 / 255.0,
            k: bytes[3] as f64 / 255.0,
        }
    }

    /// Convert to stored 8-bit samples `[S0, S1, S2, S3]`.
    ///
    /// Rounds to nearest.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            to_sample_rounded(self.c),
            to_sample_rounded(self.m),
            to_sample_rounded(self.y),
            to_sample_rounded(self.k),
        ]
    }

    /// Recombine into 8-bit RGB.
    ///
    /// Each channel is truncated toward zero, then clamped to `0..=255`.
    /// Together with the rounding in [`to_bytes()`](Self::to_bytes) this
    /// means a separate/recombine cycle is exact only up to one level.
    pub fn to_rgb_u8(self) -> [u8; 3] {
        let recombine = |ink: f64| -> u8 {
            let v = 255.0 * (1.0 - (ink * (1.0 - self.k) + self.k));
            v.trunc().clamp(0.0, 255.0) as u8
        };
        [recombine(self.c), recombine(self.m), recombine(self.y)]
    }
}

#[inline]
fn to_sample_rounded(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

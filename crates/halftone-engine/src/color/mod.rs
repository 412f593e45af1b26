//! Color separation between additive RGB and subtractive ink channels
//!
//! # Color Models
//!
//! - **Direct**: the buffer's own RGB (or grayscale) channels are screened.
//! - **Separated**: RGB is first split into four ink channels (S0..S3),
//!   those are screened, and the result is recombined into RGB.
//!
//! # Example
//!
//! ```
//! use halftone_engine::Ink;
//!
//! let ink = Ink::from_rgb_u8(0, 0, 0);
//! assert_eq!(ink.to_bytes(), [0, 0, 0, 255]);
//! assert_eq!(ink.to_rgb_u8(), [0, 0, 0]);
//! ```

mod ink;
mod separator;

pub use ink::Ink;
pub use separator::{ColorSeparator, RGB_CHANNELS, SEPARATED_CHANNELS};

/// Which channels the screeners operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModel {
    /// Screen the buffer's own channels (grayscale, RGB or RGBA).
    #[default]
    Direct,

    /// Separate RGB into four ink channels, screen those, recombine.
    ///
    /// Requires a 3-channel buffer.
    Separated,
}

//! Pixel storage for the screening pipeline.
//!
//! [`PixelBuffer`] owns the interleaved sample grid that every other
//! component reads and writes by reference. All access goes through
//! bounds-checked `get`/`set`; no raw slices are handed out mutably.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;

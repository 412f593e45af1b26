//! Test fixtures: PNG images and config snippets.

use halftone::rendering::encode_png;
use halftone_engine::PixelBuffer;

/// A config with one preset per strategy
pub const TEST_CONFIG: &str = r#"
default_preset: coarse
presets:
  coarse:
    strategy: dot
    block_size: 4
  posterize:
    strategy: threshold
    block_size: 1
  cmyk:
    strategy: threshold
    block_size: 2
    color_model: separated
  fs:
    strategy: diffusion
  fs-legacy:
    strategy: diffusion
    accumulation: byte-wrap
"#;

/// Deterministic pseudo-random samples (LCG)
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

/// Horizontal grayscale ramp from black to white
pub fn gray_ramp(width: usize, height: usize) -> PixelBuffer {
    let denom = width.saturating_sub(1).max(1);
    let samples = (0..height)
        .flat_map(|_| (0..width).map(move |x| (x * 255 / denom) as u8))
        .collect();
    PixelBuffer::from_samples(samples, width, height, 1).unwrap()
}

/// RGB noise image
pub fn rgb_noise(width: usize, height: usize, seed: u32) -> PixelBuffer {
    PixelBuffer::from_samples(noise(width * height * 3, seed), width, height, 3).unwrap()
}

/// Encode a buffer as PNG bytes without optimization
pub fn png_bytes(buffer: &PixelBuffer) -> Vec<u8> {
    encode_png(buffer, false).unwrap()
}

/// Hand-built RGBA PNG (the encoder never produces alpha from 3-channel input)
pub fn rgba_png(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(rgba).unwrap();
    }
    out
}

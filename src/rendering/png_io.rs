//! PNG decoding into [`PixelBuffer`]s and encoding back out.
//!
//! Decoding normalizes every PNG flavor to 8 bits per sample:
//!
//! - Grayscale becomes a 1-channel buffer, RGB a 3-channel buffer
//! - Palette and sub-byte images are expanded
//! - 16-bit samples are stripped to their high byte
//! - Alpha is composited against white and dropped

use crate::error::ImageError;
use halftone_engine::PixelBuffer;
use std::io::Cursor;

/// Decode PNG bytes into a grayscale or RGB pixel buffer
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::PngDecode(e.to_string()))?;
    let mut raw = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut raw)
        .map_err(|e| ImageError::PngDecode(e.to_string()))?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::Unsupported(format!(
            "{:?} bit depth after expansion",
            info.bit_depth
        )));
    }

    let width = info.width as usize;
    let height = info.height as usize;
    let (in_channels, out_channels) = match info.color_type {
        png::ColorType::Grayscale => (1, 1),
        png::ColorType::GrayscaleAlpha => (2, 1),
        png::ColorType::Rgb => (3, 3),
        png::ColorType::Rgba => (4, 3),
        other => {
            return Err(ImageError::Unsupported(format!("{other:?} color type")));
        }
    };

    let row_bytes = width * in_channels;
    let mut samples = Vec::with_capacity(width * height * out_channels);
    for row in raw.chunks(info.line_size).take(height) {
        let row = &row[..row_bytes];
        if in_channels == out_channels {
            samples.extend_from_slice(row);
            continue;
        }
        for pixel in row.chunks_exact(in_channels) {
            let (color, alpha) = pixel.split_at(out_channels);
            let a = alpha[0];
            samples.extend(color.iter().map(|&v| composite_on_white(v, a)));
        }
    }

    tracing::debug!(
        width,
        height,
        channels = out_channels,
        source = ?info.color_type,
        "Decoded PNG"
    );

    Ok(PixelBuffer::from_samples(samples, width, height, out_channels)?)
}

/// Encode a pixel buffer as an 8-bit PNG
///
/// With `optimize` the result is re-compressed with oxipng; if that fails
/// the plain encoding is returned.
pub fn encode_png(buffer: &PixelBuffer, optimize: bool) -> Result<Vec<u8>, ImageError> {
    let color_type = match buffer.channels() {
        1 => png::ColorType::Grayscale,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(ImageError::Unsupported(format!("{n}-channel buffer"))),
    };
    let width = u32::try_from(buffer.width())
        .map_err(|_| ImageError::Unsupported(format!("width {}", buffer.width())))?;
    let height = u32::try_from(buffer.height())
        .map_err(|_| ImageError::Unsupported(format!("height {}", buffer.height())))?;

    // Fast settings; oxipng re-compresses when enabled
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(buffer.samples())
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);
    Ok(optimized)
}

/// Alpha composite one sample against white
fn composite_on_white(value: u8, alpha: u8) -> u8 {
    match alpha {
        255 => value,
        0 => 255,
        _ => {
            let af = alpha as u16;
            ((value as u16 * af + 255 * (255 - af)) / 255) as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_png(color_type: png::ColorType, depth: png::BitDepth, w: u32, h: u32, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, w, h);
            encoder.set_color(color_type);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_composite_on_white() {
        assert_eq!(composite_on_white(10, 255), 10);
        assert_eq!(composite_on_white(10, 0), 255);
        assert_eq!(composite_on_white(0, 128), 127);
    }

    #[test]
    fn test_decode_grayscale() {
        let png = raw_png(png::ColorType::Grayscale, png::BitDepth::Eight, 2, 2, &[0, 64, 128, 255]);
        let buffer = decode_png(&png).unwrap();

        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.samples(), &[0, 64, 128, 255]);
    }

    #[test]
    fn test_decode_rgba_composites_on_white() {
        let png = raw_png(
            png::ColorType::Rgba,
            png::BitDepth::Eight,
            2,
            1,
            &[10, 20, 30, 255, 0, 0, 0, 0],
        );
        let buffer = decode_png(&png).unwrap();

        assert_eq!(buffer.channels(), 3);
        assert_eq!(buffer.samples(), &[10, 20, 30, 255, 255, 255]);
    }

    #[test]
    fn test_decode_gray_alpha() {
        let png = raw_png(png::ColorType::GrayscaleAlpha, png::BitDepth::Eight, 1, 1, &[0, 128]);
        let buffer = decode_png(&png).unwrap();

        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.samples(), &[127]);
    }

    #[test]
    fn test_decode_16_bit_strips_low_byte() {
        let png = raw_png(png::ColorType::Grayscale, png::BitDepth::Sixteen, 2, 1, &[0x12, 0x34, 0xAB, 0xCD]);
        let buffer = decode_png(&png).unwrap();

        assert_eq!(buffer.samples(), &[0x12, 0xAB]);
    }

    #[test]
    fn test_decode_1_bit_expands() {
        // 0b1010_0000 -> white, black, white, black
        let png = raw_png(png::ColorType::Grayscale, png::BitDepth::One, 4, 1, &[0b1010_0000]);
        let buffer = decode_png(&png).unwrap();

        assert_eq!(buffer.samples(), &[255, 0, 255, 0]);
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_png(b"definitely not a png").unwrap_err();
        assert!(matches!(err, ImageError::PngDecode(_)));
    }

    #[test]
    fn test_encode_then_decode_rgb() {
        let buffer = PixelBuffer::from_samples((0..27).map(|v| v * 9).collect(), 3, 3, 3).unwrap();
        let png = encode_png(&buffer, false).unwrap();

        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(decode_png(&png).unwrap(), buffer);
    }

    #[test]
    fn test_encode_optimized_is_valid_png() {
        let buffer = PixelBuffer::filled(16, 16, 1, 255).unwrap();
        let png = encode_png(&buffer, true).unwrap();

        assert_eq!(decode_png(&png).unwrap(), buffer);
    }
}

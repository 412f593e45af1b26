//! Assertion helpers for tests.

use halftone::rendering::decode_png;
use halftone_engine::PixelBuffer;
use pretty_assertions::assert_eq;

use super::app::CliOutput;

/// Assert bytes are a PNG and decode them
pub fn assert_png(bytes: &[u8]) -> PixelBuffer {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    decode_png(bytes).expect("PNG should decode")
}

/// Assert every sample is pure black or pure white
pub fn assert_binary(buffer: &PixelBuffer) {
    let stray: Vec<u8> = buffer
        .samples()
        .iter()
        .copied()
        .filter(|&v| v != 0 && v != 255)
        .collect();
    assert!(
        stray.is_empty(),
        "Expected only 0/255 samples, found {} others (first: {:?})",
        stray.len(),
        stray.first()
    );
}

/// Assert the CLI exited successfully
pub fn assert_success(output: &CliOutput) {
    assert!(
        output.success,
        "Expected success, got failure.\nstdout: {}\nstderr: {}",
        output.stdout, output.stderr
    );
}

/// Assert the CLI failed and stderr mentions `needle`
pub fn assert_failure_mentions(output: &CliOutput, needle: &str) {
    assert!(
        !output.success,
        "Expected failure, got success.\nstdout: {}",
        output.stdout
    );
    assert!(
        output.stderr.contains(needle),
        "Expected stderr to mention {:?}, got: {}",
        needle,
        output.stderr
    );
}

/// Assert two buffers have the same shape
pub fn assert_same_shape(a: &PixelBuffer, b: &PixelBuffer) {
    assert_eq!(
        (a.width(), a.height(), a.channels()),
        (b.width(), b.height(), b.channels())
    );
}

use crate::error::{ImageError, RenderError};
use crate::models::{AppConfig, PresetConfig};
use crate::rendering::{decode_png, encode_png};
use std::path::Path;
use std::time::Instant;

/// Per-render options picked on the command line
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Preset name; `None` selects the configured default
    pub preset: Option<String>,
    /// Field overrides applied on top of the preset
    pub overrides: PresetConfig,
    /// Re-compress the output with oxipng
    pub optimize: bool,
}

/// Summary of one completed render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub bytes: usize,
}

/// Decode, halftone and re-encode PNG images using configured presets
pub struct HalftoneService {
    config: AppConfig,
}

impl HalftoneService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Halftone PNG bytes, returning the encoded result
    pub fn render_bytes(
        &self,
        png: &[u8],
        options: &RenderOptions,
    ) -> Result<(Vec<u8>, RenderReport), RenderError> {
        let settings = self
            .config
            .resolve(options.preset.as_deref(), &options.overrides)?;
        let engine = settings.to_engine()?;

        let mut buffer = decode_png(png)?;
        tracing::debug!(?settings, "Resolved render settings");

        let start = Instant::now();
        engine.apply(&mut buffer)?;
        tracing::info!(
            strategy = settings.strategy.as_deref().unwrap_or("dot"),
            width = buffer.width(),
            height = buffer.height(),
            channels = buffer.channels(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Halftoned image"
        );

        let encoded = encode_png(&buffer, options.optimize)?;
        let report = RenderReport {
            width: buffer.width(),
            height: buffer.height(),
            channels: buffer.channels(),
            bytes: encoded.len(),
        };
        Ok((encoded, report))
    }

    /// Halftone the PNG at `input` and write the result to `output`
    ///
    /// Nothing is written when decoding or halftoning fails.
    pub fn render_file(
        &self,
        input: &Path,
        output: &Path,
        options: &RenderOptions,
    ) -> Result<RenderReport, RenderError> {
        let png = std::fs::read(input).map_err(ImageError::from)?;
        tracing::debug!(path = %input.display(), bytes = png.len(), "Read input");

        let (encoded, report) = self.render_bytes(&png, options)?;

        std::fs::write(output, &encoded).map_err(ImageError::from)?;
        tracing::info!(path = %output.display(), bytes = report.bytes, "Wrote output");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halftone_engine::PixelBuffer;

    fn gray_png(width: usize, height: usize, value: u8) -> Vec<u8> {
        let buffer = PixelBuffer::filled(width, height, 1, value).unwrap();
        encode_png(&buffer, false).unwrap()
    }

    #[test]
    fn test_render_bytes_default_preset() {
        let service = HalftoneService::new(AppConfig::default());
        let (png, report) = service
            .render_bytes(&gray_png(26, 13, 128), &RenderOptions::default())
            .unwrap();

        assert_eq!(report.width, 26);
        assert_eq!(report.height, 13);
        assert_eq!(report.channels, 1);
        assert_eq!(report.bytes, png.len());
    }

    #[test]
    fn test_render_bytes_threshold_override() {
        let service = HalftoneService::new(AppConfig::default());
        let options = RenderOptions {
            overrides: PresetConfig {
                strategy: Some("threshold".to_string()),
                block_size: Some(2),
                ..Default::default()
            },
            ..Default::default()
        };

        let (png, _) = service.render_bytes(&gray_png(4, 4, 100), &options).unwrap();
        let out = decode_png(&png).unwrap();
        assert_eq!(out.samples(), &[0u8; 16]);
    }

    #[test]
    fn test_render_bytes_unknown_preset() {
        let service = HalftoneService::new(AppConfig::default());
        let options = RenderOptions {
            preset: Some("missing".to_string()),
            ..Default::default()
        };

        let err = service.render_bytes(&gray_png(2, 2, 0), &options).unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }

    #[test]
    fn test_render_bytes_separation_needs_rgb() {
        let service = HalftoneService::new(AppConfig::default());
        let options = RenderOptions {
            overrides: PresetConfig {
                color_model: Some("separated".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = service.render_bytes(&gray_png(2, 2, 0), &options).unwrap_err();
        assert!(matches!(err, RenderError::Halftone(_)));
    }

    #[test]
    fn test_render_file_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let service = HalftoneService::new(AppConfig::default());

        let err = service
            .render_file(&dir.path().join("in.png"), &output, &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::Image(ImageError::Io(_))));
        assert!(!output.exists());
    }
}

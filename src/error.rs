use halftone_engine::{BufferError, HalftoneError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported image format: {0}")]
    Unsupported(String),

    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unknown color model: {0}")]
    UnknownColorModel(String),

    #[error("Unknown accumulation mode: {0}")]
    UnknownAccumulation(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid channel list: {0}")]
    InvalidChannels(String),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Halftone error: {0}")]
    Halftone(#[from] HalftoneError),
}

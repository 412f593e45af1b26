pub mod config;

pub use config::{
    parse_accumulation, parse_channels, parse_color_model, parse_strategy, AppConfig,
    PresetConfig,
};

use crate::assets::AssetLoader;
use crate::error::ConfigError;
use halftone_engine::{Accumulation, ColorModel, HalftoneEngine, Strategy};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Named render presets
    #[serde(default)]
    pub presets: BTreeMap<String, PresetConfig>,

    /// Preset used when none is named on the command line
    #[serde(default = "default_preset")]
    pub default_preset: Option<String>,
}

fn default_preset() -> Option<String> {
    Some("dots".to_string())
}

/// One render preset. Every field is optional; unset fields fall through
/// to the engine defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig {
    /// `dot`, `threshold` or `diffusion` (aliases accepted)
    #[serde(default)]
    pub strategy: Option<String>,

    /// Block edge in pixels
    #[serde(default)]
    pub block_size: Option<usize>,

    /// `direct` or `separated`
    #[serde(default)]
    pub color_model: Option<String>,

    /// Channel indices to screen
    #[serde(default)]
    pub channels: Option<Vec<usize>>,

    /// `wide` or `byte-wrap`
    #[serde(default)]
    pub accumulation: Option<String>,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// Read and parse failures are logged and replaced by the defaults.
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        presets = config.presets.len(),
                        default = ?config.default_preset,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from an explicitly named file
    ///
    /// Unlike [`load_from_assets`](Self::load_from_assets), a missing or
    /// malformed file is an error.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            presets = config.presets.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Get a preset by name
    pub fn get_preset(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.get(name)
    }

    /// Get the default preset
    pub fn get_default_preset(&self) -> Option<&PresetConfig> {
        self.default_preset
            .as_ref()
            .and_then(|name| self.presets.get(name))
    }

    /// Resolve the effective settings for a render
    ///
    /// Starts from the named preset (or the default preset when `name` is
    /// `None`) and lets every field set in `overrides` win.
    pub fn resolve(
        &self,
        name: Option<&str>,
        overrides: &PresetConfig,
    ) -> Result<PresetConfig, ConfigError> {
        let base = match name {
            Some(name) => self
                .get_preset(name)
                .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?
                .clone(),
            None => match self.get_default_preset() {
                Some(preset) => preset.clone(),
                None => {
                    if let Some(ref missing) = self.default_preset {
                        tracing::warn!(preset = %missing, "Default preset not found, using engine defaults");
                    }
                    PresetConfig::default()
                }
            },
        };

        Ok(base.merged_with(overrides))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut presets = BTreeMap::new();
        presets.insert(
            "dots".to_string(),
            PresetConfig {
                strategy: Some("dot".to_string()),
                block_size: Some(13),
                ..Default::default()
            },
        );

        Self {
            presets,
            default_preset: Some("dots".to_string()),
        }
    }
}

impl PresetConfig {
    /// Field-wise merge where values set in `overrides` win
    pub fn merged_with(&self, overrides: &PresetConfig) -> PresetConfig {
        PresetConfig {
            strategy: overrides.strategy.clone().or_else(|| self.strategy.clone()),
            block_size: overrides.block_size.or(self.block_size),
            color_model: overrides
                .color_model
                .clone()
                .or_else(|| self.color_model.clone()),
            channels: overrides.channels.clone().or_else(|| self.channels.clone()),
            accumulation: overrides
                .accumulation
                .clone()
                .or_else(|| self.accumulation.clone()),
        }
    }

    /// Build an engine from these settings
    ///
    /// Only names are checked here; shape-dependent checks (block size,
    /// channel range) happen when the engine sees a buffer.
    pub fn to_engine(&self) -> Result<HalftoneEngine, ConfigError> {
        let strategy = match self.strategy {
            Some(ref s) => parse_strategy(s)?,
            None => Strategy::default(),
        };

        let mut engine = HalftoneEngine::new(strategy);
        if let Some(size) = self.block_size {
            engine = engine.block_size(size);
        }
        if let Some(ref model) = self.color_model {
            engine = engine.color_model(parse_color_model(model)?);
        }
        if let Some(ref channels) = self.channels {
            engine = engine.channels(channels);
        }
        if let Some(ref accumulation) = self.accumulation {
            engine = engine.accumulation(parse_accumulation(accumulation)?);
        }

        Ok(engine)
    }
}

/// Parse a strategy name (case-insensitive)
pub fn parse_strategy(name: &str) -> Result<Strategy, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "dot" | "dots" | "am" => Ok(Strategy::Dot),
        "threshold" | "block" | "posterize" => Ok(Strategy::Threshold),
        "diffusion" | "floyd-steinberg" | "fs" => Ok(Strategy::Diffusion),
        _ => Err(ConfigError::UnknownStrategy(name.to_string())),
    }
}

/// Parse a color model name (case-insensitive)
pub fn parse_color_model(name: &str) -> Result<ColorModel, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "direct" | "rgb" => Ok(ColorModel::Direct),
        "separated" | "cmyk" => Ok(ColorModel::Separated),
        _ => Err(ConfigError::UnknownColorModel(name.to_string())),
    }
}

/// Parse an accumulation mode name (case-insensitive)
pub fn parse_accumulation(name: &str) -> Result<Accumulation, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "wide" => Ok(Accumulation::Wide),
        "byte-wrap" | "bytewrap" | "wrap" => Ok(Accumulation::ByteWrap),
        _ => Err(ConfigError::UnknownAccumulation(name.to_string())),
    }
}

/// Parse a comma-separated channel list such as `0,2`
pub fn parse_channels(list: &str) -> Result<Vec<usize>, ConfigError> {
    list.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidChannels(list.to_string()))
        })
        .collect()
}

//! Config loading with an embedded fallback
//!
//! The default `config.yaml` is compiled into the binary:
//!
//! - If no config path is set: use the embedded config only (no filesystem access)
//! - If a config path is set and the file exists: use the filesystem copy
//! - If a config path is set but the file is missing: fall back to the embedded config

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CONFIG_NAME: &str = "config.yaml";

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Config loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from `--config` or the CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new loader
    ///
    /// `config_file` should be `Some` only if a path was given. If `None`,
    /// the embedded config is used exclusively.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// The configured external path, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Whether the configured external file exists on disk
    pub fn has_external_config(&self) -> bool {
        self.config_file.as_ref().is_some_and(|p| p.exists())
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        tracing::trace!("Loading config from embedded assets");
        Self::embedded_config()
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// The config compiled into the binary
    pub fn embedded_config() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_NAME)
            .map(|f| f.data)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found"))
    }

    /// Extract the embedded config to the filesystem (init command)
    ///
    /// Writes to `target`, or to the configured path, or to `./config.yaml`.
    /// An existing file is left alone unless `force` is set.
    pub fn init(&self, target: Option<&Path>, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        let path = target
            .map(Path::to_path_buf)
            .or_else(|| self.config_file.clone())
            .unwrap_or_else(|| PathBuf::from(CONFIG_NAME));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = Self::embedded_config()?;
        fs::write(&path, &*data)?;
        tracing::info!(path = %path.display(), "Wrote default config");
        report.written.push(path.display().to_string());

        Ok(report)
    }
}

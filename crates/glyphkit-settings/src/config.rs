//! Configuration for GlyphKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into sections:
//! - Two-tone rendering (inset distance, join/cap style, tolerance, fills)
//! - SVG output defaults (stroke used for plain path previews)

use std::path::{Path, PathBuf};

use glyphkit_outline::{SvgAttributes, TwoToneStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Defaults for single-path SVG previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgSettings {
    /// Stroke colour
    pub default_stroke: String,
    /// Stroke width in SVG user units
    pub default_stroke_width: f64,
    /// Fill, `none` for outlines only
    pub default_fill: String,
}

impl Default for SvgSettings {
    fn default() -> Self {
        Self {
            default_stroke: "red".to_string(),
            default_stroke_width: 2.0,
            default_fill: "none".to_string(),
        }
    }
}

impl SvgSettings {
    /// Attributes for [`glyphkit_outline::VectorPath::svg`].
    pub fn path_attributes(&self) -> SvgAttributes {
        SvgAttributes::empty()
            .with("stroke", &self.default_stroke)
            .with("stroke-width", self.default_stroke_width)
            .with("fill", &self.default_fill)
    }
}

/// Complete configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Two-tone glyph style
    pub two_tone: TwoToneStyle,
    /// SVG output defaults
    pub svg: SvgSettings,
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/glyphkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("glyphkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not
    /// exist yet.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let style = &self.two_tone;

        if !style.inset.is_finite() || style.inset < 0.0 {
            return Err(SettingsError::invalid("two_tone.inset", "must be a finite value >= 0"));
        }

        if !style.tolerance.is_finite() || style.tolerance <= 0.0 {
            return Err(SettingsError::invalid("two_tone.tolerance", "must be > 0"));
        }

        if style.mitre_limit.is_nan() || style.mitre_limit < 1.0 {
            return Err(SettingsError::invalid("two_tone.mitre_limit", "must be >= 1"));
        }

        if style.outer_fill.trim().is_empty() {
            return Err(SettingsError::invalid("two_tone.outer_fill", "must not be empty"));
        }

        if style.inner_fill.trim().is_empty() {
            return Err(SettingsError::invalid("two_tone.inner_fill", "must not be empty"));
        }

        if !self.svg.default_stroke_width.is_finite() || self.svg.default_stroke_width < 0.0 {
            return Err(SettingsError::invalid("svg.default_stroke_width", "must be >= 0"));
        }

        Ok(())
    }
}

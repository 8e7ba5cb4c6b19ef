//! Rendering configuration.
//!
//! A [`RenderConfig`] is built once, before a rendering pass begins, and
//! injected into the [`Renderer`](crate::render::Renderer) — there is no
//! ambient global width. Config files are sparse TOML: override just the
//! values you want, unknown keys are rejected to catch typos early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! article_width = 468                          # Basis width in pixels
//! image_quality = 98                           # Resize quality (1-100)
//! edit_url_base = "post.php?action=edit&post=" # Admin edit-link prefix
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Quality setting for lossy image encoding (1-100).
///
/// Clamped on construction. The default of 98 matches what the host's
/// resize service has always been asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(98)
    }
}

/// Configuration for one rendering pass.
///
/// `article_width` is the pixel width available to a top-level article;
/// nested articles get half of it. Set it before the pass starts and leave
/// it alone while the pass runs — every image computation in the pass reads
/// the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Basis width in pixels for top-level articles.
    pub article_width: u32,
    /// Quality handed to the resize service.
    pub image_quality: Quality,
    /// Admin URL prefix the future-post notice appends the post id to.
    pub edit_url_base: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            article_width: 468,
            image_quality: Quality::default(),
            edit_url_base: "post.php?action=edit&post=".to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse a sparse TOML config, falling back to defaults per field.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.article_width == 0 {
            return Err(ConfigError::Validation(
                "article_width must be positive".into(),
            ));
        }
        // Deserialization goes around the Quality::new clamp
        if self.image_quality.value() == 0 || self.image_quality.value() > 100 {
            return Err(ConfigError::Validation(
                "image_quality must be 1-100".into(),
            ));
        }
        Ok(())
    }

    /// Basis width for top-level articles.
    pub fn width(&self) -> u32 {
        self.article_width
    }

    /// Override the basis width for the next rendering pass.
    pub fn set_width(&mut self, pixels: u32) {
        self.article_width = pixels;
    }
}

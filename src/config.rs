//! Application configuration module
//!
//! This module centralizes all application configuration settings using `confy`
//! for automatic serialization and OS-specific config directory management.
//! What the original demo kept as process-wide globals (font sizes, animation
//! durations) lives here as an explicitly constructed value handed to the
//! components that need it.

use crate::constant::APP_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|error| {
            tracing::warn!(%error, "could not load config, using default settings");
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Full URL of the WAD extraction endpoint
    #[serde(default = "default_extractor_url")]
    pub extractor_url: String,

    /// Nav button font size at rest
    #[serde(default = "default_nav_font_small")]
    pub nav_font_small: f32,

    /// Nav button font size while hovered
    #[serde(default = "default_nav_font_large")]
    pub nav_font_large: f32,

    /// Duration of the hover font tween, in milliseconds
    #[serde(default = "default_hover_tween_ms")]
    pub hover_tween_ms: u64,

    /// Startup animation stage durations
    #[serde(default)]
    pub intro: IntroTimings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extractor_url: default_extractor_url(),
            nav_font_small: default_nav_font_small(),
            nav_font_large: default_nav_font_large(),
            hover_tween_ms: default_hover_tween_ms(),
            intro: IntroTimings::default(),
        }
    }
}

fn default_extractor_url() -> String {
    "http://localhost:3000/extractDoomWadData".to_string()
}

fn default_nav_font_small() -> f32 {
    12.0
}

fn default_nav_font_large() -> f32 {
    18.0
}

fn default_hover_tween_ms() -> u64 {
    200
}

/// Durations of the intro choreography stages, all in milliseconds. The
/// offsets the timeline runs on are computed from these by summation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntroTimings {
    pub button_fade_in_ms: u64,
    pub pause_after_fade_ms: u64,
    pub button_fall_ms: u64,
    pub pause_between_falls_ms: u64,
    pub width_expand_ms: u64,
    pub before_height_expand_ms: u64,
    pub height_expand_ms: u64,
    pub before_content_fade_ms: u64,
    pub content_fade_ms: u64,
    pub wait_for_top_bar_ms: u64,
    pub top_bar_fade_ms: u64,
}

impl Default for IntroTimings {
    fn default() -> Self {
        Self {
            button_fade_in_ms: 400,
            pause_after_fade_ms: 200,
            button_fall_ms: 350,
            pause_between_falls_ms: 120,
            width_expand_ms: 500,
            before_height_expand_ms: 100,
            height_expand_ms: 500,
            before_content_fade_ms: 150,
            content_fade_ms: 400,
            wait_for_top_bar_ms: 200,
            top_bar_fade_ms: 400,
        }
    }
}

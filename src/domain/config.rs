//! Config - Application Configuration

use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::domain::counter::StepConfig;
use crate::error::{Error, InvalidSnafu, Result};
use crate::i18n::Locale;

/// Smallest accepted window edge in logical pixels
pub const MIN_WINDOW_EDGE: f32 = 200.0;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Step counter bounds
    pub counter: StepConfig,
    /// Display language
    pub locale: Locale,
    /// Initial window size
    pub window: WindowConfig,
}

/// Window configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWindowConfig")]
pub struct WindowConfig {
    width: f32,
    height: f32,
}

impl WindowConfig {
    /// Create a validated window size
    ///
    /// Both edges must be finite and at least [`MIN_WINDOW_EDGE`].
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |edge: f32| edge.is_finite() && edge >= MIN_WINDOW_EDGE;
        ensure!(
            valid(width) && valid(height),
            InvalidSnafu {
                message: format!(
                    "window size {width}x{height} must be finite and at least {MIN_WINDOW_EDGE}"
                ),
            }
        );
        Ok(Self { width, height })
    }

    /// Width in logical pixels
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height in logical pixels
    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 420.0,
        }
    }
}

/// Unvalidated on-disk shape, defaults filled per field
#[derive(Deserialize)]
#[serde(default)]
struct RawWindowConfig {
    width: f32,
    height: f32,
}

impl Default for RawWindowConfig {
    fn default() -> Self {
        let window = WindowConfig::default();
        Self {
            width: window.width,
            height: window.height,
        }
    }
}

impl TryFrom<RawWindowConfig> for WindowConfig {
    type Error = Error;

    fn try_from(raw: RawWindowConfig) -> Result<Self> {
        WindowConfig::new(raw.width, raw.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.counter, StepConfig::default());
        assert_eq!(config.locale, Locale::EnUS);
    }

    #[test]
    fn test_partial_counter_table_keeps_other_default() {
        let config: AppConfig = toml::from_str("[counter]\nmax = 7\n").unwrap();
        assert_eq!(config.counter.step(), 5);
        assert_eq!(config.counter.max(), 7);
    }

    #[test]
    fn test_zero_step_fails_to_parse() {
        let result: Result<AppConfig, _> = toml::from_str("[counter]\nstep = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig {
            counter: StepConfig::new(3, 30).unwrap(),
            locale: Locale::ZhCN,
            window: WindowConfig::new(800.0, 600.0).unwrap(),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("locale = \"zh\""));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_window_size_must_be_usable() {
        assert!(WindowConfig::new(0.0, 420.0).is_err());
        assert!(WindowConfig::new(-720.0, 420.0).is_err());
        assert!(WindowConfig::new(720.0, f32::NAN).is_err());
        assert!(WindowConfig::new(f32::INFINITY, 420.0).is_err());
        assert!(WindowConfig::new(MIN_WINDOW_EDGE, MIN_WINDOW_EDGE).is_ok());
    }

    #[test]
    fn test_bad_window_fails_to_parse() {
        let result: Result<AppConfig, _> = toml::from_str("[window]\nwidth = 0.0\n");
        assert!(result.is_err());

        let config: AppConfig = toml::from_str("[window]\nheight = 300.0\n").unwrap();
        assert_eq!(config.window.width(), 720.0);
        assert_eq!(config.window.height(), 300.0);
    }
}

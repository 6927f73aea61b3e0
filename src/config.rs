// In: src/config.rs

//! The single source of truth for compressor configuration.
//!
//! A `CompressorConfig` is created once at the application boundary (in code, from
//! a named preset, or from a JSON document handed over by the host) and then bound
//! to exactly one engine. Validation happens here, against the bounds reported by
//! the codec binding, and always before any codec context is allocated.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::traits::CodecBinding;

//==================================================================================
// I. Named Constants
//==================================================================================

pub const LEVEL_FASTEST: i32 = 1;
pub const LEVEL_DEFAULT: i32 = 3;
pub const LEVEL_BETTER: i32 = 6;
pub const LEVEL_BEST: i32 = 9;
pub const LEVEL_ULTRA: i32 = 19;

/// log2 of the smallest back-reference window the engine accepts.
pub const WINDOW_SIZE_MIN: i32 = 10;
pub const WINDOW_SIZE_DEFAULT: i32 = 22;
/// log2 of the largest back-reference window the engine accepts.
pub const WINDOW_SIZE_MAX: i32 = 31;

//==================================================================================
// II. Level Presets
//==================================================================================

/// Named points on the speed/ratio curve.
///
/// These are conveniences, not a restriction: any level inside the codec's
/// bounds is accepted by [`CompressorConfig::validate`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LevelPreset {
    Fastest,
    #[default]
    Default,
    Better,
    Best,
    Ultra,
}

impl LevelPreset {
    pub fn level(self) -> i32 {
        match self {
            LevelPreset::Fastest => LEVEL_FASTEST,
            LevelPreset::Default => LEVEL_DEFAULT,
            LevelPreset::Better => LEVEL_BETTER,
            LevelPreset::Best => LEVEL_BEST,
            LevelPreset::Ultra => LEVEL_ULTRA,
        }
    }
}

//==================================================================================
// III. CompressorConfig
//==================================================================================

/// The parameters an engine is bound to for its whole lifetime.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompressorConfig {
    /// Compression level. Must lie in the codec's `[min, max]` level range.
    #[serde(default = "default_level")]
    pub level: i32,

    /// log2 of the maximum back-reference distance. Must lie in
    /// `[WINDOW_SIZE_MIN, WINDOW_SIZE_MAX]`.
    #[serde(default = "default_window_size")]
    pub window_size: i32,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            window_size: default_window_size(),
        }
    }
}

impl CompressorConfig {
    pub fn new(level: i32, window_size: i32) -> Self {
        Self { level, window_size }
    }

    /// A config at the preset's level with the default window size.
    pub fn from_preset(preset: LevelPreset) -> Self {
        Self {
            level: preset.level(),
            ..Self::default()
        }
    }

    /// Parses a config from JSON, e.g. `{"level": 9, "windowSize": 24}`.
    /// Missing fields take their defaults; the result is validated.
    pub fn from_json<C: CodecBinding>(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::Validation(format!("malformed config: {}", e)))?;
        config.validate::<C>()?;
        Ok(config)
    }

    /// Checks both parameters against the bounds of codec `C`.
    pub fn validate<C: CodecBinding>(&self) -> Result<(), EngineError> {
        let (min_level, max_level) = C::level_bounds();
        if self.level < min_level || self.level > max_level {
            return Err(EngineError::Validation(format!(
                "invalid compression level: {} (must be {}-{})",
                self.level, min_level, max_level
            )));
        }
        if self.window_size < WINDOW_SIZE_MIN || self.window_size > WINDOW_SIZE_MAX {
            return Err(EngineError::Validation(format!(
                "invalid window size: {} (must be {}-{})",
                self.window_size, WINDOW_SIZE_MIN, WINDOW_SIZE_MAX
            )));
        }
        Ok(())
    }

    /// The window size as the codec's window log. Only meaningful after `validate`.
    pub(crate) fn window_log(&self) -> u32 {
        self.window_size.clamp(WINDOW_SIZE_MIN, WINDOW_SIZE_MAX) as u32
    }
}

/// Provides the default level for serde.
fn default_level() -> i32 {
    LEVEL_DEFAULT
}

/// Provides the default window size for serde.
fn default_window_size() -> i32 {
    WINDOW_SIZE_DEFAULT
}

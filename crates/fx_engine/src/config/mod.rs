//! Effects configuration
//!
//! All tunable animation constants live here with defaults matching the
//! shipped visuals, so a deployment can retune rates from a TOML file without
//! touching code.

use crate::error::EffectsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-frame animation rate constants
///
/// Rates are radians per second unless noted. The pointer gain feeds the
/// compounding pointer skew; setting it to `0.0` disables pointer drift
/// entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationRates {
    /// Yaw rate for `Floating` particle groups
    pub floating_yaw: f32,
    /// Pitch rate for `Floating` particle groups
    pub floating_pitch: f32,
    /// Yaw rate for `Gentle` particle groups (single-axis drift)
    pub gentle_yaw: f32,
    /// Gain applied to normalized pointer offset per second
    pub pointer_gain: f32,
    /// Fraction of the remaining distance the hover scale covers each frame
    pub hover_easing: f32,
    /// Uniform scale a hovered particle group eases toward
    pub hover_scale: f32,
}

impl Default for AnimationRates {
    fn default() -> Self {
        Self {
            floating_yaw: 0.2,
            floating_pitch: 0.1,
            gentle_yaw: 0.1,
            pointer_gain: 0.5,
            hover_easing: 0.1,
            hover_scale: 1.2,
        }
    }
}

/// Default particle group parameters for the stock page scenes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleDefaults {
    /// Point count for the hero section group
    pub hero_count: usize,
    /// Point count for each card group
    pub card_count: usize,
    /// Point count for the background group
    pub background_count: usize,
    /// Cube edge length for hero/background spawn volumes
    pub hero_spread: f32,
    /// Cube edge length for card spawn volumes
    pub card_spread: f32,
    /// Base point size for hero/background groups
    pub hero_size: f32,
    /// Base point size for card groups
    pub card_size: f32,
}

impl Default for ParticleDefaults {
    fn default() -> Self {
        Self {
            hero_count: 200,
            card_count: 20,
            background_count: 300,
            hero_spread: 20.0,
            card_spread: 4.0,
            hero_size: 0.02,
            card_size: 0.01,
        }
    }
}

/// Top-level effects engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Animation rate constants
    pub animation: AnimationRates,
    /// Stock particle group parameters
    pub particles: ParticleDefaults,
    /// Target frames per second for the driver's run loop
    pub target_fps: TargetFps,
}

/// Target frame rate wrapper so `[serde(default)]` can supply 60
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetFps(pub u32);

impl Default for TargetFps {
    fn default() -> Self {
        Self(60)
    }
}

impl EffectsConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::ConfigIo`] when the file cannot be read and
    /// [`EffectsError::ConfigParse`] when it is not valid TOML.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, EffectsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| EffectsError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| EffectsError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }
}

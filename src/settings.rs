//! Game settings
//!
//! Persisted as JSON next to the binary (or wherever the driver points).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;
use crate::sim::policy::{CollisionPolicy, CorrectOnly, EndOnContact};

/// Collision response presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PolicyPreset {
    /// Hero is pushed back onto the surface and keeps flying
    CorrectOnly,
    /// Hero is pushed back and the run ends (ground = victory, mountain = game over)
    #[default]
    EndOnContact,
}

impl PolicyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyPreset::CorrectOnly => "correct-only",
            PolicyPreset::EndOnContact => "end-on-contact",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "correct-only" | "correct" => Some(PolicyPreset::CorrectOnly),
            "end-on-contact" | "end" => Some(PolicyPreset::EndOnContact),
            _ => None,
        }
    }

    /// Instantiate the policy
    pub fn build(&self) -> Box<dyn CollisionPolicy> {
        match self {
            PolicyPreset::CorrectOnly => Box::new(CorrectOnly),
            PolicyPreset::EndOnContact => Box::new(EndOnContact),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_height: f32,
    /// Fixed RNG seed for reproducible terrain; random when unset
    pub seed: Option<u64>,
    /// Frame deltas above this (ms) are clamped
    pub max_frame_dt_ms: f32,
    pub collision_policy: PolicyPreset,
    /// Whether clouds take part in hero collision checks
    pub clouds_collide: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            seed: None,
            max_frame_dt_ms: MAX_FRAME_DT_MS,
            collision_policy: PolicyPreset::default(),
            clouds_collide: true,
        }
    }
}

impl Settings {
    /// y coordinate of the top of the ground strip
    pub fn ground_top(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Load settings from a JSON file, falling back to defaults if it is missing
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "seed": 7, "collision_policy": "CorrectOnly" }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.collision_policy, PolicyPreset::CorrectOnly);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert_eq!(settings.ground_top(), SCREEN_HEIGHT - GROUND_HEIGHT);
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = Settings::load("/nonexistent/wire-plane/settings.json").unwrap();
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("wire-plane-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(42),
            clouds_collide: false,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.seed, Some(42));
        assert!(!loaded.clouds_collide);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(PolicyPreset::from_str("END"), Some(PolicyPreset::EndOnContact));
        assert_eq!(
            PolicyPreset::from_str(PolicyPreset::CorrectOnly.as_str()),
            Some(PolicyPreset::CorrectOnly)
        );
        assert_eq!(PolicyPreset::from_str("bogus"), None);
    }
}

//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web; defaults everywhere else.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLES;
use crate::sim::PhysicsConfig;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Particle pool size for this preset, never above `MAX_PARTICLES`
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => MAX_PARTICLES / 2,
            QualityPreset::Medium | QualityPreset::High => MAX_PARTICLES,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle effects (dust, sparks, debris)
    pub particles: bool,
    /// Reduced motion (fewer particles)
    pub reduced_motion: bool,
    /// Physics tuning, per 60fps frame
    pub physics: PhysicsConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            reduced_motion: false,
            physics: PhysicsConfig::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flex_quest_settings";

    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle pool size
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else if self.reduced_motion {
            self.quality.max_particles() / 2
        } else {
            self.quality.max_particles()
        }
    }

    /// Apply overrides from a URL query string such as `?quality=low`.
    /// Unknown keys and unparseable values are ignored.
    pub fn apply_query(&mut self, query: &str) {
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "quality" => match QualityPreset::parse(value) {
                    Some(preset) => self.quality = preset,
                    None => log::warn!("Unknown quality preset {:?}", value),
                },
                "particles" => match value {
                    "on" | "1" | "true" => self.particles = true,
                    "off" | "0" | "false" => self.particles = false,
                    _ => log::warn!("Unknown particles value {:?}", value),
                },
                _ => {}
            }
        }
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Settings not saved: {:?}", e),
                },
                Err(e) => log::warn!("Settings not saved: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_physics_constants() {
        let settings = Settings::default();
        assert_eq!(settings.physics.gravity, 0.42);
        assert_eq!(settings.physics.max_fall_speed, 8.0);
        assert_eq!(settings.physics.friction, 0.85);
        assert_eq!(settings.max_particles(), MAX_PARTICLES);
    }

    #[test]
    fn test_max_particles() {
        let mut settings = Settings::from_preset(QualityPreset::High);
        assert_eq!(settings.max_particles(), MAX_PARTICLES);
        settings.reduced_motion = true;
        assert_eq!(settings.max_particles(), MAX_PARTICLES / 2);
        settings.particles = false;
        assert_eq!(settings.max_particles(), 0);
        assert_eq!(QualityPreset::Low.max_particles(), 100);
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!(QualityPreset::parse("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::parse("high"), Some(QualityPreset::High));
        assert_eq!(QualityPreset::parse("ultra"), None);
        assert_eq!(QualityPreset::Low.as_str(), "Low");
    }

    #[test]
    fn test_no_preset_exceeds_pool_cap() {
        for preset in [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High] {
            assert!(preset.max_particles() <= MAX_PARTICLES);
        }
    }

    #[test]
    fn test_apply_query() {
        let mut settings = Settings::default();
        settings.apply_query("?quality=low&particles=off&debug=1");
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(!settings.particles);

        // Bad values leave the setting alone
        settings.apply_query("quality=ultra&particles=maybe&novalue");
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(!settings.particles);

        settings.apply_query("");
        assert_eq!(settings.quality, QualityPreset::Low);
    }

    #[test]
    fn test_json_partial_fills_defaults() {
        let settings = Settings::from_json(r#"{"quality":"Low","physics":{"gravity":0.3,"max_fall_speed":6.0,"friction":0.9}}"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(settings.particles);
        assert_eq!(settings.physics.gravity, 0.3);

        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(Settings::from_json("not json").is_err());
        assert!(Settings::from_json(r#"{"quality":"Ultra"}"#).is_err());
    }
}

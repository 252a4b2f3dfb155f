//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PF_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use pfield_sim::{FieldConfig, Motion, Rgba};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Particle field configuration
    #[serde(default)]
    pub field: FieldSection,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PF_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional, never committed
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // PF_FIELD__PARTICLE_COUNT=200 -> field.particle_count = 200
        figment = figment.merge(Env::prefixed("PF_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Particle Field".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Motion model names as written in config files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    /// One velocity unit per frame
    #[default]
    PerFrame,
    /// Velocity scaled by frame time against `reference_hz`
    TimeScaled,
}

/// Particle field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSection {
    /// Number of particles
    pub particle_count: usize,
    /// Seed for the initial layout; random when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Largest initial velocity component (pixels per frame)
    pub max_speed: f32,
    /// Disc radius range [min, max)
    pub radius_range: [f32; 2],
    /// Disc opacity range [min, max)
    pub opacity_range: [f32; 2],
    /// Pointer influence distance in pixels
    pub repulsion_radius: f32,
    /// Pointer push at contact (pixels per frame)
    pub repulsion_strength: f32,
    /// Pairs closer than this are linked
    pub link_distance: f32,
    /// Link alpha at zero distance
    pub link_max_alpha: f32,
    /// Link stroke width in pixels
    pub link_width: f32,
    /// Motion model
    pub motion: MotionKind,
    /// Refresh rate a time-scaled step is measured against
    pub reference_hz: f32,
}

impl Default for FieldSection {
    fn default() -> Self {
        let field = FieldConfig::default();
        Self {
            particle_count: field.particle_count,
            seed: None,
            max_speed: field.max_speed,
            radius_range: [field.radius_min, field.radius_max],
            opacity_range: [field.opacity_min, field.opacity_max],
            repulsion_radius: field.repulsion_radius,
            repulsion_strength: field.repulsion_strength,
            link_distance: field.link_distance,
            link_max_alpha: field.link_max_alpha,
            link_width: field.link_width,
            motion: MotionKind::PerFrame,
            reference_hz: 60.0,
        }
    }
}

impl FieldSection {
    /// Convert to the simulator's configuration
    pub fn to_field_config(&self, color: Rgba) -> FieldConfig {
        let motion = match self.motion {
            MotionKind::PerFrame => Motion::PerFrame,
            MotionKind::TimeScaled => Motion::TimeScaled {
                reference_hz: self.reference_hz,
            },
        };

        FieldConfig {
            particle_count: self.particle_count,
            max_speed: self.max_speed,
            radius_min: self.radius_range[0],
            radius_max: self.radius_range[1],
            opacity_min: self.opacity_range[0],
            opacity_max: self.opacity_range[1],
            repulsion_radius: self.repulsion_radius,
            repulsion_strength: self.repulsion_strength,
            link_distance: self.link_distance,
            link_max_alpha: self.link_max_alpha,
            link_width: self.link_width,
            color,
            motion,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Particle and link color [r, g, b]
    pub particle_color: [f32; 3],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let cyan = pfield_sim::ACCENT_CYAN;
        Self {
            background_color: [0.04, 0.04, 0.06, 1.0],
            particle_color: [cyan.r, cyan.g, cyan.b],
        }
    }
}

impl RenderingConfig {
    pub fn particle_rgba(&self) -> Rgba {
        Rgba::from_rgb(self.particle_color)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Frames between stats log lines; 0 disables them
    pub stats_interval: u64,
    /// Show particle and link counts in the window title
    pub show_stats: bool,
    /// Run this many frames without a window, then exit; 0 opens a window
    pub headless_frames: u64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            stats_interval: 600,
            show_stats: false,
            headless_frames: 0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.field.particle_count, 80);
        assert_eq!(config.field.motion, MotionKind::PerFrame);
        assert_eq!(config.debug.headless_frames, 0);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("particle_count"));
        assert!(toml.contains("motion = \"per_frame\""));
    }

    #[test]
    fn test_field_section_matches_field_defaults() {
        let converted = FieldSection::default().to_field_config(pfield_sim::ACCENT_CYAN);
        let reference = FieldConfig::default();

        assert_eq!(converted.particle_count, reference.particle_count);
        assert_eq!(converted.max_speed, reference.max_speed);
        assert_eq!(converted.radius_min, reference.radius_min);
        assert_eq!(converted.opacity_max, reference.opacity_max);
        assert_eq!(converted.link_max_alpha, reference.link_max_alpha);
        assert_eq!(converted.color, reference.color);
        assert_eq!(converted.motion, reference.motion);
    }

    #[test]
    fn test_time_scaled_conversion() {
        let section = FieldSection {
            motion: MotionKind::TimeScaled,
            reference_hz: 120.0,
            ..FieldSection::default()
        };
        assert_eq!(
            section.to_field_config(Rgba::WHITE).motion,
            Motion::TimeScaled { reference_hz: 120.0 }
        );
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[field]\nparticle_count = 12\n").unwrap();
        assert_eq!(config.field.particle_count, 12);
        assert_eq!(config.field.link_distance, 120.0);
        assert_eq!(config.window.title, "Particle Field");
    }
}

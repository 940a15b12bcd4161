//! Window and physics settings
//!
//! Defaults reproduce the classic demo: 1600x900 at 60 fps, white background,
//! earth gravity.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::palette::{Rgba, WHITE};
use crate::sim::{GameState, gravity_step};

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Target frame rate
    pub fps: u32,
    /// Acceleration fed into the per-frame gravity step
    pub gravity: f32,
    /// Clear colour
    pub background: Rgba,
    /// Paddle colour (random palette colour when absent)
    pub paddle_color: Option<Rgba>,
    /// Smallest spawned ball diameter
    pub min_diameter: u32,
    /// Largest spawned ball diameter
    pub max_diameter: u32,
    /// Fixed RNG seed; the wall clock is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Paddle Balls".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            gravity: STANDARD_GRAVITY,
            background: WHITE,
            paddle_color: None,
            min_diameter: BALL_MIN_DIAMETER,
            max_diameter: BALL_MAX_DIAMETER,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that cannot open a window or spawn a ball
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("resolution must be non-zero, got {}x{}", self.width, self.height);
        }
        if self.fps == 0 {
            bail!("fps must be non-zero");
        }
        if self.min_diameter > self.max_diameter {
            bail!(
                "min_diameter {} exceeds max_diameter {}",
                self.min_diameter,
                self.max_diameter
            );
        }
        Ok(())
    }

    /// Build the session these settings describe. Fails on settings that
    /// [`validate`](Self::validate) rejects.
    pub fn new_game(&self, seed: u64) -> Result<GameState> {
        self.validate()?;
        let mut state = GameState::with_resolution(self.width, self.height, seed);
        state.fps = self.fps;
        state.gravity_step = gravity_step(self.gravity);
        state.diameter_range = (self.min_diameter, self.max_diameter);
        if let Some(color) = self.paddle_color {
            state.paddle.color = color;
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_demo() {
        let settings = Settings::default();
        assert_eq!((settings.width, settings.height), (1600, 900));
        assert_eq!(settings.fps, 60);
        assert_eq!(settings.background, WHITE);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "fps": 30, "seed": 7 }"#).unwrap();
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.width, 1600);
        assert_eq!(settings.gravity, STANDARD_GRAVITY);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Settings::from_json(r#"{ "width": 0 }"#).is_err());
        assert!(Settings::from_json(r#"{ "fps": 0 }"#).is_err());
        assert!(Settings::from_json(r#"{ "min_diameter": 50, "max_diameter": 10 }"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn new_game_applies_settings() {
        let settings = Settings {
            width: 800,
            height: 600,
            fps: 30,
            gravity: 19.6,
            paddle_color: Some([0.0, 0.0, 1.0, 1.0]),
            ..Default::default()
        };
        let state = settings.new_game(1).unwrap();
        assert_eq!(state.resolution, (800, 600));
        assert_eq!(state.fps, 30);
        assert!((state.gravity_step - 2.0 * GRAVITY_STEP).abs() < 1e-6);
        assert_eq!(state.paddle.color, [0.0, 0.0, 1.0, 1.0]);
        // 800 / 15 = 53
        assert_eq!(state.paddle.width, 53.0);
    }

    #[test]
    fn new_game_rejects_inverted_diameter_range() {
        let settings = Settings {
            min_diameter: 50,
            max_diameter: 10,
            ..Default::default()
        };
        let err = settings.new_game(1).unwrap_err();
        assert!(err.to_string().contains("min_diameter"));
    }
}

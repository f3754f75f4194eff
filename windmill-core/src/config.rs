/// Scene configuration
use nalgebra::Vector3;

use crate::color::Color;

/// Errors from validating a [`WindmillConfig`]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("screen size must be non-zero, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },
    #[error("placement spread must be at least 1 on every axis, got {0:?}")]
    EmptySpread([u32; 3]),
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("point size must be non-zero")]
    EmptyPoint,
}

/// Everything the Windmill scene treats as a constant.
///
/// The defaults reproduce the stock demo; tests shrink the cube count or
/// screen to keep draw-call assertions readable.
#[derive(Debug, Clone, PartialEq)]
pub struct WindmillConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// PRNG seed for the cube layout
    pub seed: u64,
    pub cube_count: usize,
    /// Exclusive upper bound of the integer offset per axis
    pub spread: [u32; 3],
    /// Camera speed in pixels per second while the pointer moves
    pub pointer_speed: f32,
    /// Degrees per second
    pub spin_rate: f32,
    pub point_size: u32,
    pub background: [f32; 3],
    pub shade: Color,
    pub tint: Color,
}

impl Default for WindmillConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 640,
            seed: 98,
            cube_count: 200,
            spread: [10, 30, 5],
            pointer_speed: 2000.0,
            spin_rate: 5.0,
            point_size: 3,
            background: [0.03, 0.03, 0.05],
            shade: Color::rgba(25, 25, 25, 255),
            tint: Color::rgba(255, 255, 255, 255),
        }
    }
}

impl WindmillConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.spread.contains(&0) {
            return Err(ConfigError::EmptySpread(self.spread));
        }
        for (name, value) in [
            ("pointer_speed", self.pointer_speed),
            ("spin_rate", self.spin_rate),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        if self.point_size == 0 {
            return Err(ConfigError::EmptyPoint);
        }
        Ok(())
    }

    pub fn spread_vector(&self) -> Vector3<u32> {
        Vector3::from(self.spread)
    }
}

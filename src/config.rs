//! Startup configuration.
//!
//! Every field is optional in the TOML file; anything omitted falls back to
//! the values in [`crate::constants`].

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::constants::*;

/// Layout of the enemy row spawned when a game starts.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WaveConfig {
    pub count: usize,
    pub origin_x: f32,
    pub origin_y: f32,
    pub spacing: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            count: WAVE_COUNT,
            origin_x: WAVE_ORIGIN_X,
            origin_y: WAVE_ORIGIN_Y,
            spacing: WAVE_SPACING,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub starting_lives: i32,
    /// Horizontal distance moved per left/right key press.
    pub player_step: f32,
    /// Upward speed of a fired bullet, units per frame.
    pub bullet_speed: f32,
    /// Downward drift of every enemy, units per frame.
    pub enemy_speed: f32,
    /// A bullet hits an enemy when both axis distances are below this.
    pub hit_threshold: f32,
    pub kill_score: u32,
    /// Spawn one extra enemy every this many frames. 0 disables it.
    pub reinforce_every: u64,
    pub wave: WaveConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            starting_lives: STARTING_LIVES,
            player_step: PLAYER_STEP,
            bullet_speed: BULLET_SPEED,
            enemy_speed: ENEMY_SPEED,
            hit_threshold: HIT_THRESHOLD,
            kill_score: KILL_SCORE,
            reinforce_every: 0,
            wave: WaveConfig::default(),
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_step", self.player_step),
            ("bullet_speed", self.bullet_speed),
            ("enemy_speed", self.enemy_speed),
            ("hit_threshold", self.hit_threshold),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be a positive number, got {value}");
            }
        }
        if !(1..=MAX_STARTING_LIVES).contains(&self.starting_lives) {
            bail!(
                "starting_lives must be between 1 and {MAX_STARTING_LIVES}, got {}",
                self.starting_lives
            );
        }
        if !self.wave.origin_x.is_finite()
            || !self.wave.origin_y.is_finite()
            || !self.wave.spacing.is_finite()
        {
            bail!("wave origin and spacing must be finite");
        }
        if self.wave.count > MAX_ENEMIES {
            tracing::warn!(
                count = self.wave.count,
                capacity = MAX_ENEMIES,
                "opening wave exceeds enemy pool; extra enemies will not spawn"
            );
        }
        Ok(())
    }

    /// Where the player starts: centred, a fixed offset above the bottom edge.
    pub fn player_start(&self) -> (f32, f32) {
        (
            self.screen_width / 2.0,
            self.screen_height - PLAYER_BOTTOM_OFFSET,
        )
    }
}

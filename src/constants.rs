//! Compile-time game constants.
//!
//! Pool capacities are fixed here; everything tunable at startup lives in
//! [`crate::config::GameConfig`] and defaults to the values below.

// Pools
pub const MAX_BULLETS: usize = 256;
pub const MAX_ENEMIES: usize = 128;

// Play area
pub const SCREEN_WIDTH: f32 = 640.0;
pub const SCREEN_HEIGHT: f32 = 480.0;

// Player
pub const STARTING_LIVES: i32 = 3;
pub const MAX_STARTING_LIVES: i32 = 99;
pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0; // player sits this far above the bottom edge
pub const PLAYER_STEP: f32 = 5.0;

// Projectiles and enemies (units per frame)
pub const BULLET_SPEED: f32 = 5.0;
pub const ENEMY_SPEED: f32 = 0.5;
pub const ENEMY_HEALTH: i32 = 1;

// Scoring
pub const HIT_THRESHOLD: f32 = 10.0;
pub const KILL_SCORE: u32 = 100;

// Opening wave
pub const WAVE_COUNT: usize = 10;
pub const WAVE_ORIGIN_X: f32 = 50.0;
pub const WAVE_ORIGIN_Y: f32 = 50.0;
pub const WAVE_SPACING: f32 = 50.0;

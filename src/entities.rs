//! All game entity types — pure data, no frame logic.

use crate::config::GameConfig;
use crate::constants::{MAX_BULLETS, MAX_ENEMIES};
use crate::pool::Pool;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

// ── Moving bodies ─────────────────────────────────────────────────────────────

/// Anything that advances by a fixed per-frame velocity.
pub trait Body {
    fn position(&self) -> Position;
    fn advance(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub health: i32,
}

impl Enemy {
    /// Apply one hit. Returns `true` once the enemy is destroyed.
    pub fn take_hit(&mut self) -> bool {
        self.health -= 1;
        self.health <= 0
    }
}

impl Body for Bullet {
    fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }

    fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }
}

impl Body for Enemy {
    fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }

    fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Not clamped: enemies escaping after the last life push this negative.
    pub lives: i32,
    pub score: u32,
}

// ── Master game state ─────────────────────────────────────────────────────────

pub type BulletPool = Pool<Bullet, MAX_BULLETS>;
pub type EnemyPool = Pool<Enemy, MAX_ENEMIES>;

#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub bullets: BulletPool,
    pub enemies: EnemyPool,
    pub frame: u64,
    pub config: GameConfig,
}

impl GameState {
    pub fn player_position(&self) -> Position {
        Position {
            x: self.player.x,
            y: self.player.y,
        }
    }

    pub fn out_of_lives(&self) -> bool {
        self.player.lives <= 0
    }
}

/// What happened during one `update_game` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub kills: usize,
    pub escaped: usize,
}

/// Read-only view handed to the renderer each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub player: Position,
    pub bullets: Vec<Position>,
    pub enemies: Vec<Position>,
    pub lives: i32,
    pub score: u32,
}

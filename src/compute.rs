//! Frame logic.
//!
//! Every step takes the owned `GameState` by `&mut` and runs to completion
//! without blocking. The only source of randomness is the injected `Rng`,
//! used for optional reinforcement spawns.

use rand::Rng;

use crate::config::GameConfig;
use crate::constants::ENEMY_HEALTH;
use crate::entities::{
    Body, Bullet, BulletPool, Enemy, EnemyPool, FrameReport, GameState, Player, Snapshot,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh game: player at the start position, empty bullet pool and
/// the opening enemy wave.
pub fn init_state(config: GameConfig) -> GameState {
    let (x, y) = config.player_start();
    let mut state = GameState {
        player: Player {
            x,
            y,
            lives: config.starting_lives,
            score: 0,
        },
        bullets: BulletPool::new(),
        enemies: EnemyPool::new(),
        frame: 0,
        config,
    };

    let wave = config.wave;
    for i in 0..wave.count {
        spawn_enemy(&mut state, wave.origin_x + i as f32 * wave.spacing, wave.origin_y);
    }
    tracing::debug!(enemies = state.enemies.active_count(), "opening wave spawned");
    state
}

// ── Spawner ──────────────────────────────────────────────────────────────────

/// Put an enemy at (`x`, `y`) drifting straight down. Returns the slot used,
/// or `None` when the enemy pool is full (nothing changes).
pub fn spawn_enemy(state: &mut GameState, x: f32, y: f32) -> Option<usize> {
    if state.enemies.is_full() {
        tracing::trace!(x, y, "enemy pool full, spawn dropped");
        return None;
    }
    state.enemies.allocate(Enemy {
        x,
        y,
        vx: 0.0,
        vy: state.config.enemy_speed,
        health: ENEMY_HEALTH,
    })
}

/// Launch a bullet. Returns the slot used, or `None` when the bullet pool is
/// full (nothing changes).
pub fn fire_bullet(state: &mut GameState, x: f32, y: f32, vx: f32, vy: f32) -> Option<usize> {
    if state.bullets.is_full() {
        tracing::trace!(x, y, "bullet pool full, shot dropped");
        return None;
    }
    state.bullets.allocate(Bullet { x, y, vx, vy })
}

/// Fire straight up from the player's current position.
pub fn player_shoot(state: &mut GameState) -> Option<usize> {
    let (x, y) = (state.player.x, state.player.y);
    let speed = state.config.bullet_speed;
    fire_bullet(state, x, y, 0.0, -speed)
}

// ── Input-driven movement ────────────────────────────────────────────────────

pub fn move_player_left(state: &mut GameState) {
    state.player.x -= state.config.player_step;
}

pub fn move_player_right(state: &mut GameState) {
    state.player.x += state.config.player_step;
}

// ── Per-frame steps ──────────────────────────────────────────────────────────

/// One Euler step for every active bullet and enemy. Velocities are per
/// frame; there is no delta-time scaling.
pub fn step_kinematics(state: &mut GameState) {
    for (_, bullet) in state.bullets.iter_active_mut() {
        bullet.advance();
    }
    for (_, enemy) in state.enemies.iter_active_mut() {
        enemy.advance();
    }
}

fn within_reach(bullet: &Bullet, enemy: &Enemy, threshold: f32) -> bool {
    (bullet.x - enemy.x).abs() < threshold && (bullet.y - enemy.y).abs() < threshold
}

/// Pair every active bullet against every active enemy, both in slot order.
/// A bullet is spent on the first enemy it reaches, so it can destroy at most
/// one enemy per frame. Returns the number of enemies destroyed.
pub fn resolve_collisions(state: &mut GameState) -> usize {
    let threshold = state.config.hit_threshold;
    let mut kills = 0;

    for bi in 0..state.bullets.capacity() {
        let Some(bullet) = state.bullets.get(bi).copied() else {
            continue;
        };
        let target = state
            .enemies
            .iter_active()
            .find(|(_, enemy)| within_reach(&bullet, enemy, threshold))
            .map(|(ei, _)| ei);
        let Some(ei) = target else {
            continue;
        };

        state.bullets.deactivate(bi);
        let destroyed = state
            .enemies
            .get_mut(ei)
            .is_some_and(|enemy| enemy.take_hit());
        if destroyed {
            state.enemies.deactivate(ei);
            state.player.score = state.player.score.saturating_add(state.config.kill_score);
            kills += 1;
            tracing::debug!(
                bullet = bi,
                enemy = ei,
                score = state.player.score,
                "enemy destroyed"
            );
        }
    }

    kills
}

/// Drop bullets above the top edge and enemies below the bottom edge. Each
/// escaped enemy costs one life; lives are not clamped. Returns the number of
/// escaped enemies.
pub fn cull_out_of_bounds(state: &mut GameState) -> usize {
    let bottom = state.config.screen_height;

    state.bullets.retain_active(|bullet| bullet.y >= 0.0);
    let escaped = state.enemies.retain_active(|enemy| enemy.y <= bottom);

    if escaped > 0 {
        state.player.lives -= escaped as i32;
        tracing::debug!(escaped, lives = state.player.lives, "enemies slipped past");
    }
    escaped
}

/// Spawn one enemy along the top edge every `reinforce_every` frames.
/// Returns the slot used, if a spawn was due and the pool had room.
pub fn spawn_reinforcements(state: &mut GameState, rng: &mut impl Rng) -> Option<usize> {
    let every = state.config.reinforce_every;
    if every == 0 || state.frame % every != 0 {
        return None;
    }

    let margin = state.config.hit_threshold;
    let width = state.config.screen_width;
    let x = if width - margin > margin {
        rng.gen_range(margin..width - margin)
    } else {
        width / 2.0
    };
    spawn_enemy(state, x, 0.0)
}

/// Advance the simulation by one frame: move, resolve hits, cull, then
/// spawn any reinforcements that are due.
pub fn update_game(state: &mut GameState, rng: &mut impl Rng) -> FrameReport {
    state.frame += 1;

    step_kinematics(state);
    let kills = resolve_collisions(state);
    let escaped = cull_out_of_bounds(state);
    spawn_reinforcements(state, rng);

    FrameReport { kills, escaped }
}

// ── Render view ──────────────────────────────────────────────────────────────

pub fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        player: state.player_position(),
        bullets: state.bullets.iter_active().map(|(_, b)| b.position()).collect(),
        enemies: state.enemies.iter_active().map(|(_, e)| e.position()).collect(),
        lives: state.player.lives,
        score: state.player.score,
    }
}

//! Gameplay core for a small fixed-pool arcade shooter.
//!
//! The library owns the game state and the per-frame update. It takes input
//! events in and hands a read-only [`entities::Snapshot`] out; drawing and
//! key polling live in the binary.

pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod input;
pub mod pool;

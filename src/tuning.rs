use std::time::Duration;

// Gameplay tuning. Distances are arena units, rates are per tick.

pub const PLAYER_RADIUS: f64 = 24.0;
pub const PLAYER_COLOR: (u8, u8, u8) = (0xec, 0xf0, 0xf1);

pub const PROJECTILE_RADIUS: f64 = 5.0;
pub const PROJECTILE_COLOR: (u8, u8, u8) = (0xec, 0xf0, 0xf1);
/// Projectiles travel `velocity * PROJECTILE_SPEED` each tick.
pub const PROJECTILE_SPEED: f64 = 4.0;

pub const ENEMY_MIN_RADIUS: f64 = 8.0;
pub const ENEMY_RADIUS_SPREAD: f64 = 20.0;
/// Magnitude of the velocity an enemy is aimed with.
pub const ENEMY_APPROACH: f64 = 0.2;
pub const ENEMY_SPEED: f64 = 4.0;
pub const ENEMY_SATURATION: f64 = 0.5;
pub const ENEMY_LIGHTNESS: f64 = 0.5;

/// Enemies above this radius shrink on hit instead of dying.
pub const SHRINK_THRESHOLD: f64 = 16.0;
pub const SHRINK_STEP: f64 = 8.0;
pub const SHRINK_FLOOR: f64 = 14.0;
pub const SHRINK_DURATION: Duration = Duration::from_secs(1);

pub const SHRINK_POINTS: u32 = 20;
pub const KILL_POINTS: u32 = 10;

pub const PARTICLE_MAX_RADIUS: f64 = 4.0;
pub const PARTICLE_FRICTION: f64 = 0.995;
pub const PARTICLE_FADE: f64 = 0.002;

/// Anything closer than this (edge to edge) counts as touching.
pub const CONTACT_DISTANCE: f64 = 1.0;

pub const SPAWN_INTERVAL: Duration = Duration::from_millis(1000);

use std::time::Duration;

use rand::Rng;

use crate::entities::{Enemy, Hsl, Velocity, angle_between};
use crate::tuning::{
    ENEMY_APPROACH, ENEMY_LIGHTNESS, ENEMY_MIN_RADIUS, ENEMY_RADIUS_SPREAD, ENEMY_SATURATION,
};

/// Fixed-interval enemy timer, fed with elapsed frame time.
#[derive(Debug, Clone)]
pub struct Spawner {
    interval: Duration,
    accumulated: Duration,
}

impl Spawner {
    /// A zero `interval` disables spawning: `advance` then always returns 0.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Adds `dt` to the timer and returns how many spawns came due.
    /// Always 0 when the spawner was built with a zero interval.
    pub fn advance(&mut self, dt: Duration) -> usize {
        if self.interval.is_zero() {
            return 0;
        }

        self.accumulated += dt;
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// Creates an enemy just outside one of the arena edges, heading for the centre.
pub fn spawn_enemy<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Enemy {
    let radius = ENEMY_MIN_RADIUS + rng.random::<f64>() * ENEMY_RADIUS_SPREAD;

    // Top/bottom edges half the time, left/right the other half
    let side = rng.random::<f64>();
    let (x, y) = if side < 0.5 {
        let x = rng.random::<f64>() * width;
        let y = if side < 0.25 { -radius } else { height + radius };
        (x, y)
    } else {
        let x = if side > 0.75 { -radius } else { width + radius };
        let y = rng.random::<f64>() * height;
        (x, y)
    };

    let angle = angle_between(x, y, width / 2.0, height / 2.0);
    let velocity = Velocity::from_angle(angle).scaled(ENEMY_APPROACH);
    let color = Hsl::new(
        rng.random::<f64>() * 360.0,
        ENEMY_SATURATION,
        ENEMY_LIGHTNESS,
    );

    Enemy::new(x, y, radius, color.into(), velocity)
}

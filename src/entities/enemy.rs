use std::time::Duration;

use super::color::Rgb;
use super::geometry::{Circle, Velocity};
use crate::tuning::{
    ENEMY_SPEED, KILL_POINTS, SHRINK_DURATION, SHRINK_FLOOR, SHRINK_POINTS, SHRINK_STEP,
    SHRINK_THRESHOLD,
};

/// What a single projectile hit did to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Shrunk { points: u32 },
    Destroyed { points: u32 },
}

impl HitOutcome {
    pub fn points(self) -> u32 {
        match self {
            HitOutcome::Shrunk { points } | HitOutcome::Destroyed { points } => points,
        }
    }
}

/// Eased radius animation, advanced explicitly by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusTween {
    pub from: f64,
    pub to: f64,
    pub elapsed: Duration,
    pub duration: Duration,
}

impl RadiusTween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Moves the animation forward and returns the radius for the new instant.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f64 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        // power1.out
        let eased = 1.0 - (1.0 - progress).powi(2);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub velocity: Velocity,
    pub alive: bool,
    /// Active shrink animation, if any
    pub shrink: Option<RadiusTween>,
}

impl Enemy {
    pub fn new(x: f64, y: f64, radius: f64, color: Rgb, velocity: Velocity) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            velocity,
            alive: true,
            shrink: None,
        }
    }

    pub fn update(&mut self, dt: Duration) {
        if let Some(tween) = self.shrink.as_mut() {
            self.radius = tween.advance(dt);
            if tween.is_finished() {
                self.shrink = None;
            }
        }

        self.x += self.velocity.x * ENEMY_SPEED;
        self.y += self.velocity.y * ENEMY_SPEED;
    }

    /// Applies a projectile hit. Large enemies start shrinking, small ones die.
    pub fn hit(&mut self) -> HitOutcome {
        if self.radius > SHRINK_THRESHOLD {
            let target = (self.radius - SHRINK_STEP).max(SHRINK_FLOOR);
            self.shrink = Some(RadiusTween::new(self.radius, target, SHRINK_DURATION));
            HitOutcome::Shrunk {
                points: SHRINK_POINTS,
            }
        } else {
            self.alive = false;
            HitOutcome::Destroyed {
                points: KILL_POINTS,
            }
        }
    }

    /// Radius the enemy is heading toward once any animation settles.
    pub fn target_radius(&self) -> f64 {
        self.shrink.map_or(self.radius, |tween| tween.to)
    }
}

impl Circle for Enemy {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn enemy(radius: f64) -> Enemy {
        Enemy::new(0.0, 0.0, radius, Rgb::new(255, 0, 0), Velocity::new(0.2, 0.0))
    }

    #[test]
    fn test_enemy_moves_four_times_velocity() {
        let mut enemy = enemy(10.0);
        enemy.update(FRAME);
        assert!((enemy.x - 0.8).abs() < 1e-12);
        assert_eq!(enemy.y, 0.0);
    }

    #[test]
    fn test_large_enemy_shrinks() {
        let mut enemy = enemy(26.0);
        assert_eq!(enemy.hit(), HitOutcome::Shrunk { points: 20 });
        assert!(enemy.alive);
        assert_eq!(enemy.target_radius(), 18.0);
        // Radius is animated, not snapped
        assert_eq!(enemy.radius, 26.0);
    }

    #[test]
    fn test_shrink_floor() {
        let mut enemy = enemy(17.0);
        enemy.hit();
        assert_eq!(enemy.target_radius(), 14.0);
    }

    #[test]
    fn test_small_enemy_destroyed() {
        let mut enemy = enemy(16.0);
        assert_eq!(enemy.hit(), HitOutcome::Destroyed { points: 10 });
        assert!(!enemy.alive);
    }

    #[test]
    fn test_shrink_completes_after_one_second() {
        let mut enemy = enemy(26.0);
        enemy.hit();

        let mut last = enemy.radius;
        for _ in 0..70 {
            enemy.update(FRAME);
            assert!(enemy.radius <= last);
            last = enemy.radius;
        }

        assert_eq!(enemy.radius, 18.0);
        assert!(enemy.shrink.is_none());
    }

    #[test]
    fn test_tween_eases_out() {
        let mut tween = RadiusTween::new(20.0, 10.0, Duration::from_secs(1));
        let half = tween.advance(Duration::from_millis(500));
        // power1.out covers 75% of the distance at the halfway mark
        assert!((half - 12.5).abs() < 1e-9);
        assert_eq!(tween.advance(Duration::from_secs(5)), 10.0);
        assert!(tween.is_finished());
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_hit_never_shrinks_below_floor(radius in 8.0f64..28.0) {
                let mut enemy = enemy(radius);
                match enemy.hit() {
                    HitOutcome::Shrunk { points } => {
                        prop_assert!(radius > 16.0);
                        prop_assert_eq!(points, 20);
                        prop_assert!(enemy.target_radius() >= 14.0);
                        prop_assert!(enemy.target_radius() < radius);
                    }
                    HitOutcome::Destroyed { points } => {
                        prop_assert!(radius <= 16.0);
                        prop_assert_eq!(points, 10);
                        prop_assert!(!enemy.alive);
                    }
                }
            }
        }
    }
}

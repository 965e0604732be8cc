use super::color::Rgb;
use super::geometry::{Circle, Velocity, angle_between};
use crate::tuning::{PROJECTILE_COLOR, PROJECTILE_RADIUS, PROJECTILE_SPEED};

#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub velocity: Velocity,
    pub alive: bool,
}

impl Projectile {
    pub fn new(x: f64, y: f64, velocity: Velocity) -> Self {
        Self {
            x,
            y,
            radius: PROJECTILE_RADIUS,
            color: PROJECTILE_COLOR.into(),
            velocity,
            alive: true,
        }
    }

    /// A projectile leaving `(origin_x, origin_y)` with unit velocity toward the target.
    pub fn aimed(origin_x: f64, origin_y: f64, target_x: f64, target_y: f64) -> Self {
        let angle = angle_between(origin_x, origin_y, target_x, target_y);
        Self::new(origin_x, origin_y, Velocity::from_angle(angle))
    }

    pub fn update(&mut self) {
        self.x += self.velocity.x * PROJECTILE_SPEED;
        self.y += self.velocity.y * PROJECTILE_SPEED;
    }

    /// True once any edge of the projectile crosses an arena edge.
    pub fn is_out_of_bounds(&self, width: f64, height: f64) -> bool {
        self.x - self.radius < 0.0
            || self.x + self.radius > width
            || self.y - self.radius < 0.0
            || self.y + self.radius > height
    }
}

impl Circle for Projectile {
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

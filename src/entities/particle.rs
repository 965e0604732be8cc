use rand::Rng;

use super::color::Rgb;
use super::geometry::Velocity;
use crate::tuning::{PARTICLE_FADE, PARTICLE_FRICTION, PARTICLE_MAX_RADIUS};

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub velocity: Velocity,
    pub opacity: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, radius: f64, color: Rgb, velocity: Velocity) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            velocity,
            opacity: 1.0,
        }
    }

    pub fn update(&mut self) {
        self.velocity = self.velocity.scaled(PARTICLE_FRICTION);
        self.x += self.velocity.x;
        self.y += self.velocity.y;
        self.opacity -= PARTICLE_FADE;
    }

    pub fn is_dead(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// Creates an explosion burst of `count` particles at the given position
pub fn create_explosion_particles<R: Rng + ?Sized>(
    rng: &mut R,
    x: f64,
    y: f64,
    count: usize,
    color: Rgb,
) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let radius = rng.random::<f64>() * PARTICLE_MAX_RADIUS;
            let velocity = Velocity::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5);
            Particle::new(x, y, radius, color, velocity)
        })
        .collect()
}

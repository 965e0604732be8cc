mod color;
mod enemy;
mod game_state;
mod geometry;
mod particle;
mod player;
mod projectile;

// Re-export all public types
pub use color::{Hsl, Rgb};
pub use enemy::{Enemy, HitOutcome, RadiusTween};
pub use game_state::GameState;
pub use geometry::{Circle, Velocity, angle_between};
pub use particle::{Particle, create_explosion_particles};
pub use player::Player;
pub use projectile::Projectile;

// Library exports for testing
pub use app::App;
pub use config::Config;
pub use entities::{
    Circle, Enemy, GameState, HitOutcome, Hsl, Particle, Player, Projectile, RadiusTween, Rgb,
    Velocity,
};
pub use game::{Game, GameConfig, GameEvent};
pub use spawner::{Spawner, spawn_enemy};

pub mod app;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
pub mod spawner;
pub mod tuning;

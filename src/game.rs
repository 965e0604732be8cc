use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::entities::{
    Circle, Enemy, GameState, HitOutcome, Particle, Player, Projectile,
    create_explosion_particles,
};
use crate::spawner::{Spawner, spawn_enemy};
use crate::tuning::SPAWN_INTERVAL;

/// Settings a [`Game`] is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed. Same seed and inputs, same game.
    pub seed: u64,
    /// Time between enemy spawns. Zero switches spawning off.
    pub spawn_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            spawn_interval: SPAWN_INTERVAL,
        }
    }
}

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    EnemySpawned { x: f64, y: f64, radius: f64 },
    EnemyShrunk { score: u32 },
    EnemyDestroyed { score: u32 },
    GameOver { score: u32 },
}

/// The game loop state: one player, three mutable entity collections and a score.
pub struct Game {
    state: GameState,
    player: Player,
    projectiles: Vec<Projectile>,
    enemies: Vec<Enemy>,
    particles: Vec<Particle>,
    score: u32,
    /// arena dimensions
    width: f64,
    height: f64,
    spawner: Spawner,
    rng: StdRng,
    games_played: u32,
}

impl Game {
    pub fn new(config: GameConfig, width: f64, height: f64) -> Self {
        Self {
            state: GameState::Ready,
            player: Player::new(width / 2.0, height / 2.0),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            score: 0,
            width,
            height,
            spawner: Spawner::new(config.spawn_interval),
            rng: StdRng::seed_from_u64(config.seed),
            games_played: 0,
        }
    }

    /// Begins a fresh run. Does nothing (and returns false) while a run is in progress.
    pub fn start(&mut self) -> bool {
        if !self.state.can_start() {
            return false;
        }

        self.score = 0;
        self.projectiles.clear();
        self.enemies.clear();
        self.particles.clear();
        self.spawner.reset();
        self.state = GameState::Playing;
        self.games_played += 1;

        info!(game = self.games_played, "run started");
        true
    }

    pub fn pause(&mut self) {
        if self.state == GameState::Playing {
            self.state = GameState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == GameState::Paused {
            self.state = GameState::Playing;
        }
    }

    /// Label for the start control: the first run is a start, later ones a retry.
    pub fn start_label(&self) -> &'static str {
        if self.games_played == 0 {
            "Start"
        } else {
            "Try Again"
        }
    }

    /// Adopts new arena dimensions. The running state is left untouched.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width == self.width && height == self.height {
            return;
        }
        debug!(width, height, "arena resized");
        self.width = width;
        self.height = height;
        self.player.recenter(width, height);
    }

    /// Fires a projectile from the centre toward the given arena point.
    pub fn fire_at(&mut self, x: f64, y: f64) {
        if self.state != GameState::Playing {
            return;
        }
        let projectile = Projectile::aimed(self.width / 2.0, self.height / 2.0, x, y);
        self.projectiles.push(projectile);
    }

    /// Adds an enemy to the arena.
    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Advances the game by one frame that took `dt`.
    pub fn tick(&mut self, dt: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state != GameState::Playing {
            return events;
        }

        for _ in 0..self.spawner.advance(dt) {
            let enemy = spawn_enemy(&mut self.rng, self.width, self.height);
            debug!(x = enemy.x, y = enemy.y, radius = enemy.radius, "enemy spawned");
            events.push(GameEvent::EnemySpawned {
                x: enemy.x,
                y: enemy.y,
                radius: enemy.radius,
            });
            self.enemies.push(enemy);
        }

        // Update projectiles; out-of-bounds ones are dropped this tick
        for projectile in &mut self.projectiles {
            if projectile.is_out_of_bounds(self.width, self.height) {
                projectile.alive = false;
            } else {
                projectile.update();
            }
        }

        // Update particles
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|p| !p.is_dead());

        self.check_hits(&mut events);

        // Enemies touching the player end the run
        if let Some(enemy) = self
            .enemies
            .iter()
            .find(|e| e.alive && e.touches(&self.player))
        {
            info!(
                score = self.score,
                enemy_x = enemy.x,
                enemy_y = enemy.y,
                "player hit, game over"
            );
            self.state = GameState::GameOver;
            events.push(GameEvent::GameOver { score: self.score });
        }

        for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
            enemy.update(dt);
        }

        self.projectiles.retain(|p| p.alive);
        self.enemies.retain(|e| e.alive);

        events
    }

    fn check_hits(&mut self, events: &mut Vec<GameEvent>) {
        for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
            for projectile in self.projectiles.iter_mut().filter(|p| p.alive) {
                if !enemy.touches(&*projectile) {
                    continue;
                }

                let burst = enemy.radius.ceil() as usize;
                self.particles.extend(create_explosion_particles(
                    &mut self.rng,
                    projectile.x,
                    projectile.y,
                    burst,
                    enemy.color,
                ));

                let outcome = enemy.hit();
                self.score += outcome.points();
                projectile.alive = false;

                match outcome {
                    HitOutcome::Shrunk { .. } => {
                        debug!(score = self.score, radius = enemy.target_radius(), "enemy shrunk");
                        events.push(GameEvent::EnemyShrunk { score: self.score });
                    }
                    HitOutcome::Destroyed { .. } => {
                        debug!(score = self.score, "enemy destroyed");
                        events.push(GameEvent::EnemyDestroyed { score: self.score });
                        break;
                    }
                }
            }
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

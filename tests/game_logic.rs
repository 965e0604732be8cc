/// Integration tests for game logic
///
/// These tests drive the game loop through its public API and verify
/// collision handling, scoring, lifecycle and spawning.
use particle_shooter::{
    Enemy, Game, GameConfig, GameEvent, GameState, Rgb, Velocity, spawn_enemy,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

/// A started game with spawning switched off
fn playing_game() -> Game {
    let config = GameConfig {
        seed: 11,
        spawn_interval: Duration::ZERO,
    };
    let mut game = Game::new(config, WIDTH, HEIGHT);
    assert!(game.start());
    game
}

fn still_enemy(x: f64, y: f64, radius: f64) -> Enemy {
    Enemy::new(x, y, radius, Rgb::new(191, 64, 64), Velocity::default())
}

fn run_until<F: Fn(&Game) -> bool>(game: &mut Game, done: F) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..1000 {
        if done(&*game) {
            break;
        }
        events.extend(game.tick(FRAME));
    }
    events
}

#[test]
fn test_projectile_removed_when_leaving_arena() {
    let mut game = playing_game();
    game.fire_at(WIDTH, HEIGHT / 2.0);

    let mut positions = Vec::new();
    while let Some(projectile) = game.projectiles().first() {
        positions.push(projectile.x);
        game.tick(FRAME);
        assert!(positions.len() < 200);
    }
    let last_x = positions[positions.len() - 1];

    // Removed on the tick it was found past the right edge (radius 5)
    assert!(last_x + 5.0 > WIDTH);
    assert!(last_x - 4.0 + 5.0 <= WIDTH);
}

#[test]
fn test_large_enemy_shrinks_for_twenty_points() {
    let mut game = playing_game();
    game.add_enemy(still_enemy(600.0, 300.0, 24.0));
    game.fire_at(WIDTH, HEIGHT / 2.0);

    let events = run_until(&mut game, |g| g.projectiles().is_empty());

    assert_eq!(game.score(), 20);
    assert_eq!(game.enemies().len(), 1);
    assert_eq!(game.enemies()[0].target_radius(), 16.0);
    assert!(events.contains(&GameEvent::EnemyShrunk { score: 20 }));
    assert!(!game.particles().is_empty());
}

#[test]
fn test_small_enemy_destroyed_for_ten_points() {
    let mut game = playing_game();
    game.add_enemy(still_enemy(600.0, 300.0, 16.0));
    game.fire_at(WIDTH, HEIGHT / 2.0);

    let events = run_until(&mut game, |g| g.projectiles().is_empty());

    assert_eq!(game.score(), 10);
    assert!(game.enemies().is_empty());
    assert!(game.projectiles().is_empty());
    assert_eq!(events, vec![GameEvent::EnemyDestroyed { score: 10 }]);
    assert_eq!(game.particles().len(), 16);
}

#[test]
fn test_shrunk_enemy_dies_on_later_hits() {
    let mut game = playing_game();
    game.add_enemy(still_enemy(600.0, 300.0, 20.0));

    // First hit shrinks 20 -> 14
    game.fire_at(WIDTH, HEIGHT / 2.0);
    run_until(&mut game, |g| g.projectiles().is_empty());
    assert_eq!(game.score(), 20);

    // Let the shrink animation finish
    for _ in 0..70 {
        game.tick(FRAME);
    }
    assert_eq!(game.enemies()[0].radius, 14.0);

    game.fire_at(WIDTH, HEIGHT / 2.0);
    run_until(&mut game, |g| g.projectiles().is_empty());
    assert_eq!(game.score(), 30);
    assert!(game.enemies().is_empty());
}

#[test]
fn test_player_collision_freezes_game() {
    let mut game = playing_game();
    let player_x = game.player().x;
    // Heading straight for the player from the left
    game.add_enemy(Enemy::new(
        player_x - 60.0,
        HEIGHT / 2.0,
        10.0,
        Rgb::new(64, 191, 64),
        Velocity::new(0.2, 0.0),
    ));

    let (before_x, events) = loop {
        let x = game.enemies()[0].x;
        let events = game.tick(FRAME);
        if game.state() == GameState::GameOver {
            break (x, events);
        }
        assert!(x < player_x);
    };
    assert_eq!(events, vec![GameEvent::GameOver { score: 0 }]);

    // The touching enemy still moves on the tick that ends the run
    assert!((game.enemies()[0].x - (before_x + 0.8)).abs() < 1e-9);

    // Nothing moves and nothing scores once the run is over
    game.fire_at(0.0, 0.0);
    let enemy_x = game.enemies()[0].x;
    assert!(game.tick(FRAME).is_empty());
    assert_eq!(game.enemies()[0].x, enemy_x);
    assert!(game.projectiles().is_empty());
    assert_eq!(game.score(), 0);
    assert_eq!(game.start_label(), "Try Again");
}

#[test]
fn test_restart_resets_score_and_collections() {
    let config = GameConfig {
        seed: 5,
        spawn_interval: Duration::from_millis(1000),
    };
    let mut game = Game::new(config, WIDTH, HEIGHT);
    game.start();

    // Score a kill, leave a projectile in flight, then get hit
    game.add_enemy(still_enemy(600.0, 300.0, 12.0));
    game.fire_at(WIDTH, HEIGHT / 2.0);
    run_until(&mut game, |g| g.enemies().is_empty());
    game.fire_at(0.0, HEIGHT / 2.0);
    game.add_enemy(still_enemy(game.player().x, game.player().y + 20.0, 12.0));
    game.tick(FRAME);

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.score(), 10);
    assert!(!game.enemies().is_empty());
    assert!(!game.projectiles().is_empty());
    assert!(!game.particles().is_empty());

    assert!(game.start());
    assert_eq!(game.score(), 0);
    assert!(game.enemies().is_empty());
    assert!(game.projectiles().is_empty());
    assert!(game.particles().is_empty());

    // Spawning resumes on the usual schedule
    let spawned = (0..63)
        .flat_map(|_| game.tick(FRAME))
        .filter(|e| matches!(e, GameEvent::EnemySpawned { .. }))
        .count();
    assert_eq!(spawned, 1);
}

#[test]
fn test_particles_fade_and_disappear() {
    let mut game = playing_game();
    game.add_enemy(still_enemy(600.0, 300.0, 10.0));
    game.fire_at(WIDTH, HEIGHT / 2.0);
    run_until(&mut game, |g| !g.particles().is_empty());

    let mut last = game.particles()[0].opacity;
    assert_eq!(last, 1.0);
    let mut ticks = 0;
    while !game.particles().is_empty() {
        game.tick(FRAME);
        if let Some(particle) = game.particles().first() {
            assert!((last - particle.opacity - 0.002).abs() < 1e-9);
            last = particle.opacity;
        }
        ticks += 1;
        assert!(ticks <= 501);
    }
    assert!(ticks >= 499);
}

#[test]
fn test_seeded_spawner_stays_on_edges() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..500 {
        let enemy = spawn_enemy(&mut rng, WIDTH, HEIGHT);
        let r = enemy.radius;
        let interior = enemy.x > -r && enemy.x < WIDTH + r && enemy.y > -r && enemy.y < HEIGHT + r;
        assert!(!interior, "enemy spawned inside the arena at ({}, {})", enemy.x, enemy.y);
    }
}

#[test]
fn test_same_seed_same_game() {
    let config = GameConfig {
        seed: 77,
        spawn_interval: Duration::from_millis(200),
    };
    let mut a = Game::new(config, WIDTH, HEIGHT);
    let mut b = Game::new(config, WIDTH, HEIGHT);
    a.start();
    b.start();

    for _ in 0..120 {
        assert_eq!(a.tick(FRAME), b.tick(FRAME));
    }
    assert_eq!(a.enemies().len(), b.enemies().len());
}

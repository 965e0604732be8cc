use color_eyre::Result;
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::Config;
use crate::entities::GameState;
use crate::game::{Game, GameEvent};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView, Viewport};

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game: Game,
    /// Frames info
    frame_budget: Duration,
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `columns` x `rows`.
    pub fn new(config: &Config, columns: u16, rows: u16) -> Self {
        let viewport = Viewport::new(config.cell_width, config.cell_height);
        let (width, height) = viewport.arena_size(columns, rows);
        let game_config = config.game_config();
        info!(seed = game_config.seed, width, height, "game created");

        Self {
            running: true,
            game: Game::new(game_config, width, height),
            frame_budget: config.frame_budget(),
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(viewport),
        }
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Calculate FPS
            let frame_time = frame_start.duration_since(self.last_frame_time);
            self.last_frame_time = frame_start;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            // Keep the arena in step with the terminal before drawing
            let size = terminal.size()?;
            self.resize(size.width, size.height);

            terminal.draw(|frame| {
                let view = RenderView {
                    game: &self.game,
                    fps: self.fps,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            // Poll input events and get actions
            self.input_manager.poll_events(&self.game.state())?;
            let actions = self.input_manager.actions().to_vec();
            self.process_actions(&actions);

            let events = self.game.tick(frame_time);
            self.log_events(&events);

            // Sleep off the rest of the frame budget
            if let Some(remaining) = self.frame_budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        Ok(())
    }

    /// Process input actions and update game state accordingly
    pub fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match *action {
                InputAction::Quit => {
                    info!(score = self.game.score(), "quit requested");
                    self.running = false;
                }
                InputAction::Start => {
                    self.game.start();
                }
                InputAction::Pause => {
                    self.game.pause();
                }
                InputAction::Resume => {
                    self.game.resume();
                }
                InputAction::Resize { columns, rows } => {
                    self.resize(columns, rows);
                }
                InputAction::FireAt { column, row } => {
                    let (x, y) = self.renderer.viewport().cell_to_arena(column, row);
                    self.game.fire_at(x, y);
                }
            }
        }
    }

    fn resize(&mut self, columns: u16, rows: u16) {
        let (width, height) = self.renderer.viewport().arena_size(columns, rows);
        self.game.resize(width, height);
    }

    fn log_events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::GameOver { score } => {
                    info!(score, games = self.game.games_played(), "run ended");
                }
                other => debug!(event = ?other),
            }
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> GameState {
        self.game.state()
    }
}

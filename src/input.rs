use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use crate::entities::GameState;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Fire toward the terminal cell that was clicked
    FireAt { column: u16, row: u16 },
    Start,
    Pause,
    Resume,
    Resize { columns: u16, rows: u16 },
    Quit,
}

/// Collects raw terminal events and translates them into game actions
#[derive(Debug, Default)]
pub struct InputManager {
    actions: Vec<InputAction>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polls for all input events and stores the resulting actions
    /// Should be called once per frame before reading actions
    pub fn poll_events(&mut self, game_state: &GameState) -> color_eyre::Result<()> {
        self.actions.clear();

        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            self.handle_event(event, game_state);
        }

        Ok(())
    }

    /// Translates a single terminal event
    pub fn handle_event(&mut self, event: Event, game_state: &GameState) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_press(key_event, game_state);
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse(mouse_event, game_state);
            }
            Event::Resize(columns, rows) => {
                self.actions.push(InputAction::Resize { columns, rows });
            }
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: &GameState) {
        // Check for quit keys first (works in any state)
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.actions.push(InputAction::Quit);
            return;
        }

        let action = match (game_state, key_event.code) {
            (
                GameState::Ready | GameState::GameOver,
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R'),
            ) => Some(InputAction::Start),
            (GameState::Playing, KeyCode::Char('p') | KeyCode::Char('P')) => {
                Some(InputAction::Pause)
            }
            (GameState::Paused, KeyCode::Char('p') | KeyCode::Char('P')) => {
                Some(InputAction::Resume)
            }
            _ => None,
        };

        self.actions.extend(action);
    }

    fn handle_mouse(&mut self, mouse_event: MouseEvent, game_state: &GameState) {
        if *game_state == GameState::Playing
            && mouse_event.kind == MouseEventKind::Down(MouseButton::Left)
        {
            self.actions.push(InputAction::FireAt {
                column: mouse_event.column,
                row: mouse_event.row,
            });
        }
    }

    /// Returns all actions gathered this frame
    /// Must be called after poll_events()
    pub fn actions(&self) -> &[InputAction] {
        &self.actions
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the first start.
    #[default]
    Ready,
    Playing,
    Paused,
    GameOver,
}

impl GameState {
    /// Whether a start request should be honoured from this state.
    pub fn can_start(self) -> bool {
        matches!(self, GameState::Ready | GameState::GameOver)
    }
}

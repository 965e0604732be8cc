use super::color::Rgb;
use super::geometry::Circle;
use crate::tuning::{PLAYER_COLOR, PLAYER_RADIUS};

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
}

impl Player {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            radius: PLAYER_RADIUS,
            color: PLAYER_COLOR.into(),
        }
    }

    /// Keeps the player at the centre of a resized arena.
    pub fn recenter(&mut self, width: f64, height: f64) {
        self.x = width / 2.0;
        self.y = height / 2.0;
    }
}

impl Circle for Player {
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

    #[test]
    fn test_player_new() {
        let player = Player::new(400.0, 300.0);
        assert_eq!(player.x, 400.0);
        assert_eq!(player.y, 300.0);
        assert_eq!(player.radius, 24.0);
        assert_eq!(player.color, Rgb::new(0xec, 0xf0, 0xf1));
    }

    #[test]
    fn test_player_recenter() {
        let mut player = Player::new(400.0, 300.0);
        player.recenter(1000.0, 500.0);
        assert_eq!((player.x, player.y), (500.0, 250.0));
    }
}

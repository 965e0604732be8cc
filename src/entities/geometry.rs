use crate::tuning::CONTACT_DISTANCE;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians).
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Anything that occupies a disc on the arena.
pub trait Circle {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn radius(&self) -> f64;

    fn distance_to(&self, other: &impl Circle) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }

    /// Edge-to-edge gap below [`CONTACT_DISTANCE`].
    fn touches(&self, other: &impl Circle) -> bool {
        self.distance_to(other) - self.radius() - other.radius() < CONTACT_DISTANCE
    }
}

/// Angle from `(from_x, from_y)` toward `(to_x, to_y)`.
pub fn angle_between(from_x: f64, from_y: f64, to_x: f64, to_y: f64) -> f64 {
    (to_y - from_y).atan2(to_x - from_x)
}

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};

use crate::game::GameConfig;

/// Command-line settings.
#[derive(Debug, Clone, Parser)]
#[command(name = "particle-shooter")]
#[command(about = "Hold the centre: click to blast the orbs closing in on you")]
pub struct Config {
    /// RNG seed; a random one is picked (and logged) when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between enemy spawns
    #[arg(long, default_value_t = 1000)]
    pub spawn_interval_ms: u64,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Arena units covered by one terminal column
    #[arg(long, default_value_t = 8.0)]
    pub cell_width: f64,

    /// Arena units covered by one terminal row
    #[arg(long, default_value_t = 16.0)]
    pub cell_height: f64,

    /// Where tracing output goes (the terminal belongs to the game)
    #[arg(long, default_value = "particle-shooter.log")]
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            spawn_interval_ms: 1000,
            fps: 60,
            cell_width: 8.0,
            cell_height: 16.0,
            log_file: PathBuf::from("particle-shooter.log"),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(eyre!("--fps must be at least 1"));
        }
        if self.spawn_interval_ms == 0 {
            return Err(eyre!("--spawn-interval-ms must be at least 1"));
        }
        if !(self.cell_width.is_finite() && self.cell_width > 0.0) {
            return Err(eyre!("--cell-width must be positive, got {}", self.cell_width));
        }
        if !(self.cell_height.is_finite() && self.cell_height > 0.0) {
            return Err(eyre!("--cell-height must be positive, got {}", self.cell_height));
        }
        Ok(())
    }

    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Resolves the seed (drawing one if none was given) into a [`GameConfig`].
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            spawn_interval: Duration::from_millis(self.spawn_interval_ms),
        }
    }
}

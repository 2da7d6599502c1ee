use crate::grid::{self, GridError};
use crate::units::{ColumnsCount, RowsCount};

pub const ROWS: usize = 61;
pub const COLS: usize = 81;

/// Animation speed range, as offered by the speed control of a driver.
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 200;
pub const DEFAULT_SPEED: u32 = 80;

/// At or above this speed a tick takes `MAX_SPEED_BATCH` steps.
pub const FULL_SPEED_THRESHOLD: u32 = 190;
pub const MAX_SPEED_BATCH: usize = 100;
/// Below full speed one tick takes `speed / SPEED_PER_STEP` steps (at least one).
pub const SPEED_PER_STEP: u32 = 20;

/// Delay between animation ticks.
pub const TICK_MILLIS: u64 = 1;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeConfig {
    pub rows: RowsCount,
    pub columns: ColumnsCount,
    /// None seeds from system entropy, so every session carves different mazes.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: RowsCount(ROWS),
            columns: ColumnsCount(COLS),
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn with_dimensions(rows: usize, columns: usize) -> MazeConfig {
        MazeConfig {
            rows: RowsCount(rows),
            columns: ColumnsCount(columns),
            ..MazeConfig::default()
        }
    }

    pub fn seeded(self, seed: u64) -> MazeConfig {
        MazeConfig { seed: Some(seed), ..self }
    }

    /// Grid dimensions must be odd and at least 3, checked before any grid is built.
    pub fn validate(&self) -> Result<(), GridError> {
        grid::validate_dimensions(self.rows, self.columns)
    }
}

//! **mazes_stepper** generates perfect mazes on a wall/passage grid and searches them, one cell
//! at a time, so a driver can animate both at whatever speed it likes.

pub mod cells;
pub mod config;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod pathing;
pub mod session;
pub mod stepper;
pub mod units;
pub mod utils;

pub use crate::cells::GridCoordinate;
pub use crate::grid::{Grid, GridError};
pub use crate::session::{Session, SessionError};
pub use crate::stepper::{Algorithm, Completion, Progress, StepError, Stepper};

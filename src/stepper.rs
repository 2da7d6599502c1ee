//! The resumable step protocol shared by the maze generators and the path finders.
//!
//! Each algorithm is an explicit state machine keeping its stack/queue/trace between calls so an
//! outside animation loop can pull one processed cell at a time, at whatever rate it likes.

use std::error::Error;
use std::fmt;

use crate::cells::GridCoordinate;
use crate::generators::GeneratorKind;
use crate::grid::{Grid, GridError};
use crate::pathing::SolverKind;
use crate::units::StepsCount;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Algorithm {
    Generator(GeneratorKind),
    Solver(SolverKind),
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Algorithm::Generator(kind) => write!(f, "{}", kind),
            Algorithm::Solver(kind) => write!(f, "{}", kind),
        }
    }
}

/// How a run ended.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Completion {
    MazeGenerated,
    /// Ordered Start to End.
    PathFound(Vec<GridCoordinate>),
    /// The search ran out of cells without reaching End.
    NoPath,
    /// The wall follower hit its iteration cap before reaching End.
    IterationLimitReached { iterations: StepsCount },
}

impl Completion {
    pub fn status(&self) -> &'static str {
        match *self {
            Completion::MazeGenerated => "Maze Generated",
            Completion::PathFound(_) => "Path Found",
            Completion::NoPath => "No Path Found",
            Completion::IterationLimitReached { .. } => "Gave Up",
        }
    }

    pub fn path(&self) -> Option<&[GridCoordinate]> {
        match *self {
            Completion::PathFound(ref path) => Some(path),
            _ => None,
        }
    }
}

/// Result of a single `advance`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Progress {
    /// The cell just reached or examined.
    Visited(GridCoordinate),
    /// No more work. Reported exactly once per stepper.
    Finished(Completion),
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum StepError {
    /// `advance` called again after the stepper reported `Finished`.
    AlreadyComplete,
    Grid(GridError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StepError::AlreadyComplete => write!(f, "the algorithm run is already complete"),
            StepError::Grid(ref e) => write!(f, "grid error during step: {}", e),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            StepError::AlreadyComplete => None,
            StepError::Grid(ref e) => Some(e),
        }
    }
}

impl From<GridError> for StepError {
    fn from(e: GridError) -> StepError {
        StepError::Grid(e)
    }
}

/// A single-threaded, cooperative, resumable algorithm run.
///
/// A stepper is never restarted. It is handed the same grid on every call; generators carve
/// passages into it, path finders only read it.
pub trait Stepper {
    /// Run forward to the next processed cell.
    ///
    /// Returns `Progress::Finished` the first time there is no work left and
    /// `StepError::AlreadyComplete` on every call after that, without touching the grid.
    fn advance(&mut self, grid: &mut Grid) -> Result<Progress, StepError>;

    fn is_exhausted(&self) -> bool;

    fn algorithm(&self) -> Algorithm;
}

/// Advance up to `steps` times, handing every visited cell to `on_visit`.
///
/// Stops early and returns the completion if the run finishes inside the batch. Exactly the same
/// as calling `advance` that many times in a row.
pub fn advance_by<F>(stepper: &mut dyn Stepper,
                     grid: &mut Grid,
                     steps: StepsCount,
                     mut on_visit: F)
                     -> Result<Option<Completion>, StepError>
    where F: FnMut(GridCoordinate)
{
    for _ in 0..steps.0 {
        match stepper.advance(grid)? {
            Progress::Visited(coord) => on_visit(coord),
            Progress::Finished(completion) => return Ok(Some(completion)),
        }
    }
    Ok(None)
}

/// Advance until the run finishes, collecting every visited cell in order.
pub fn run_to_completion(stepper: &mut dyn Stepper,
                         grid: &mut Grid)
                         -> Result<(Vec<GridCoordinate>, Completion), StepError> {
    let mut visits = vec![];
    loop {
        match stepper.advance(grid)? {
            Progress::Visited(coord) => visits.push(coord),
            Progress::Finished(completion) => return Ok((visits, completion)),
        }
    }
}

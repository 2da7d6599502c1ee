//! The one maze a driver animates: the grid plus whatever algorithm is running on it and the
//! visited/path/current state the renderer reads after each tick.

use log::debug;
use rand::{Rng, SeedableRng};
use std::cmp;
use std::error::Error;
use std::fmt;

use crate::cells::GridCoordinate;
use crate::config::{self, MazeConfig};
use crate::generators::{GeneratorKind, MazeRng};
use crate::grid::{Grid, GridError};
use crate::pathing::SolverKind;
use crate::stepper::{self, Algorithm, Completion, StepError, Stepper};
use crate::units::StepsCount;
use crate::utils::{self, FnvHashSet};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SessionError {
    /// Only one run at a time; finish or abandon the current one first.
    RunInProgress(Algorithm),
    NoActiveRun,
    Grid(GridError),
    Step(StepError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SessionError::RunInProgress(algorithm) => {
                write!(f, "{} is still running", algorithm)
            }
            SessionError::NoActiveRun => write!(f, "no algorithm is running"),
            SessionError::Grid(ref e) => write!(f, "{}", e),
            SessionError::Step(ref e) => write!(f, "{}", e),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            SessionError::Grid(ref e) => Some(e),
            SessionError::Step(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> SessionError {
        SessionError::Grid(e)
    }
}

impl From<StepError> for SessionError {
    fn from(e: StepError) -> SessionError {
        SessionError::Step(e)
    }
}

/// Number of steps one animation tick should take at the given speed.
pub fn steps_for_speed(speed: u32) -> StepsCount {
    if speed >= config::FULL_SPEED_THRESHOLD {
        StepsCount(config::MAX_SPEED_BATCH)
    } else {
        StepsCount(cmp::max(1, (speed / config::SPEED_PER_STEP) as usize))
    }
}

pub struct Session {
    grid: Grid,
    rng: MazeRng,
    active: Option<Box<dyn Stepper>>,
    visited: FnvHashSet<GridCoordinate>,
    path: Vec<GridCoordinate>,
    current: Option<GridCoordinate>,
    solved: bool,
    last_completion: Option<Completion>,
}

impl Session {
    pub fn new(config: MazeConfig) -> Result<Session, SessionError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.columns)?;
        let rng = match config.seed {
            Some(seed) => MazeRng::seed_from_u64(seed),
            None => MazeRng::from_entropy(),
        };

        Ok(Session {
            visited: utils::fnv_hashset(grid.size()),
            grid,
            rng,
            active: None,
            path: vec![],
            current: None,
            solved: false,
            last_completion: None,
        })
    }

    /// Fresh all-walls grid and no search state. Refused while an algorithm is running, as the
    /// run's own bookkeeping would no longer match the grid.
    pub fn reset_maze(&mut self) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.clear_maze();
        Ok(())
    }

    /// Reset the maze and start carving a new one.
    pub fn generate(&mut self, kind: GeneratorKind) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.clear_maze();
        let seed = self.rng.gen::<u64>();
        debug!("generating {}x{} maze with {}", self.grid.rows().0, self.grid.columns().0, kind);
        self.active = Some(kind.stepper(&self.grid, seed));
        Ok(())
    }

    /// Start a search over the current maze. Previous search state is cleared, carved passages
    /// are kept.
    pub fn solve(&mut self, kind: SolverKind) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.clear_search_state();
        debug!("solving with {}", kind);
        self.active = Some(kind.stepper(&self.grid));
        Ok(())
    }

    /// Advance the running algorithm by up to `steps` cells.
    ///
    /// Returns the completion when the run finishes during this tick; the stepper is dropped and
    /// further ticks report `NoActiveRun` until a new run is started.
    pub fn tick(&mut self, steps: StepsCount) -> Result<Option<Completion>, SessionError> {
        let stepper = self.active.as_mut().ok_or(SessionError::NoActiveRun)?;

        let visited = &mut self.visited;
        let current = &mut self.current;
        let done = stepper::advance_by(stepper.as_mut(), &mut self.grid, steps, |cell| {
            visited.insert(cell);
            *current = Some(cell);
        })?;

        if let Some(ref completion) = done {
            self.complete(completion);
        }
        Ok(done)
    }

    /// Run the current algorithm to the end in one go.
    pub fn drain(&mut self) -> Result<Completion, SessionError> {
        loop {
            if let Some(completion) = self.tick(StepsCount(config::MAX_SPEED_BATCH))? {
                return Ok(completion);
            }
        }
    }

    /// Drop the running algorithm where it stands. Nothing is rolled back; a partly carved maze
    /// stays partly carved until the next `generate`.
    pub fn abandon(&mut self) -> Option<Algorithm> {
        let abandoned = self.active.take().map(|s| s.algorithm());
        if let Some(algorithm) = abandoned {
            debug!("abandoned {}", algorithm);
        }
        self.current = None;
        abandoned
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn visited(&self) -> &FnvHashSet<GridCoordinate> {
        &self.visited
    }

    /// Start to End once a search succeeded, empty otherwise.
    #[inline]
    pub fn path(&self) -> &[GridCoordinate] {
        &self.path
    }

    #[inline]
    pub fn current(&self) -> Option<GridCoordinate> {
        self.current
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn running_algorithm(&self) -> Option<Algorithm> {
        self.active.as_ref().map(|s| s.algorithm())
    }

    pub fn last_completion(&self) -> Option<&Completion> {
        self.last_completion.as_ref()
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        match self.running_algorithm() {
            Some(algorithm) => Err(SessionError::RunInProgress(algorithm)),
            None => Ok(()),
        }
    }

    fn clear_maze(&mut self) {
        self.grid.reset();
        self.clear_search_state();
    }

    fn clear_search_state(&mut self) {
        self.visited.clear();
        self.path.clear();
        self.current = None;
        self.solved = false;
        self.last_completion = None;
    }

    fn complete(&mut self, completion: &Completion) {
        let algorithm = self.active.take().map(|s| s.algorithm());
        self.current = None;
        if let Completion::PathFound(ref path) = *completion {
            self.path = path.clone();
            self.solved = true;
        }
        if let Some(algorithm) = algorithm {
            debug!("{} finished after {} cells: {}",
                  algorithm,
                  self.visited.len(),
                  completion.status());
        }
        self.last_completion = Some(completion.clone());
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Session :: running: {:?}, visited: {}, path: {}, solved: {}",
               self.running_algorithm(),
               self.visited.len(),
               self.path.len(),
               self.solved)
    }
}

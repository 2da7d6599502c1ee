use log::{debug, warn};

use super::SolverKind;
use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::stepper::{Algorithm, Completion, Progress, StepError, Stepper};
use crate::units::StepsCount;
use crate::utils::{self, FnvHashSet};

/// Single path depth first walker.
///
/// From the current cell take the first passage neighbour (down, right, up, left) that has never
/// been stepped on; with nowhere new to go, step back one cell along the path. Only on a perfect
/// maze (a tree) is the walked path guaranteed to be the one true route, which is what every
/// generator here produces.
///
/// A cell is never entered twice, so the walk always ends, but it is still capped at an
/// iteration limit and gives up if that runs out.
#[derive(Debug)]
pub struct WallFollower {
    current: GridCoordinate,
    end: GridCoordinate,
    path: Vec<GridCoordinate>,
    visited: FnvHashSet<GridCoordinate>,
    iterations: usize,
    iteration_limit: usize,
    stranded: bool,
    finished: bool,
}

impl WallFollower {
    /// Capped at twice the grid size: entering and leaving every cell once.
    pub fn new(grid: &Grid) -> WallFollower {
        WallFollower::with_iteration_limit(grid, StepsCount(2 * grid.size()))
    }

    pub fn with_iteration_limit(grid: &Grid, limit: StepsCount) -> WallFollower {
        let start = grid.start();
        let mut visited = utils::fnv_hashset(grid.size());
        visited.insert(start);

        WallFollower {
            current: start,
            end: grid.end(),
            path: vec![start],
            visited,
            iterations: 0,
            iteration_limit: limit.0,
            stranded: false,
            finished: false,
        }
    }

    /// The walk so far, Start first.
    pub fn path(&self) -> &[GridCoordinate] {
        &self.path
    }

    fn finish(&mut self, completion: Completion) -> Progress {
        self.finished = true;
        debug!("wall follower took {} steps: {}", self.iterations, completion.status());
        Progress::Finished(completion)
    }
}

impl Stepper for WallFollower {
    fn advance(&mut self, grid: &mut Grid) -> Result<Progress, StepError> {
        if self.finished {
            return Err(StepError::AlreadyComplete);
        }
        if self.stranded {
            return Ok(self.finish(Completion::NoPath));
        }
        if self.current == self.end {
            let path = self.path.clone();
            return Ok(self.finish(Completion::PathFound(path)));
        }
        if self.iterations >= self.iteration_limit {
            warn!("wall follower gave up after {} steps", self.iterations);
            let iterations = StepsCount(self.iterations);
            return Ok(self.finish(Completion::IterationLimitReached { iterations }));
        }

        let here = self.current;
        self.iterations += 1;

        let visited = &self.visited;
        match grid.neighbours4(here).find(|neighbour| !visited.contains(neighbour)) {
            Some(next) => {
                self.visited.insert(next);
                self.path.push(next);
                self.current = next;
            }
            None => {
                if self.path.len() > 1 {
                    self.path.pop();
                    if let Some(&previous) = self.path.last() {
                        self.current = previous;
                    }
                } else {
                    self.stranded = true;
                }
            }
        }

        Ok(Progress::Visited(here))
    }

    fn is_exhausted(&self) -> bool {
        self.finished
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Solver(SolverKind::WallFollower)
    }
}

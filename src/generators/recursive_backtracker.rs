use log::debug;
use rand::seq::SliceRandom;

use super::{GeneratorKind, MazeRng};
use crate::cells::GridCoordinate;
use crate::grid::{CoordinateSmallVec, Grid};
use crate::stepper::{Algorithm, Completion, Progress, StepError, Stepper};
use crate::utils::{self, FnvHashSet};

/// Depth first maze carving with an explicit stack.
///
/// Look at the node on top of the stack. If it has unvisited nodes two cells away pick one at
/// random, knock down the wall in between and push it, otherwise pop back to the previous node.
/// Long twisting corridors with few dead ends are characteristic of this algorithm.
///
/// Each step reports the node on top of the stack, so backtracking shows up in an animation as
/// the cursor retreating along the corridor.
#[derive(Debug)]
pub struct RecursiveBacktracker {
    stack: Vec<GridCoordinate>,
    visited: FnvHashSet<GridCoordinate>,
    rng: MazeRng,
    finished: bool,
}

impl RecursiveBacktracker {
    pub fn new(grid: &Grid, rng: MazeRng) -> RecursiveBacktracker {
        let start = grid.start();
        let mut visited = utils::fnv_hashset(grid.nodes_count().0);
        visited.insert(start);

        RecursiveBacktracker {
            stack: vec![start],
            visited,
            rng,
            finished: false,
        }
    }
}

impl Stepper for RecursiveBacktracker {
    fn advance(&mut self, grid: &mut Grid) -> Result<Progress, StepError> {
        if self.finished {
            return Err(StepError::AlreadyComplete);
        }

        let current = match self.stack.last() {
            Some(&top) => top,
            None => {
                self.finished = true;
                debug!("recursive backtracker carved {} walls", grid.carved_walls_count());
                return Ok(Progress::Finished(Completion::MazeGenerated));
            }
        };

        let unvisited: CoordinateSmallVec = grid.node_neighbours(current)
            .into_iter()
            .filter(|neighbour| !self.visited.contains(neighbour))
            .collect();

        if let Some(&next) = unvisited.choose(&mut self.rng) {
            grid.carve_between(current, next)?;
            self.visited.insert(next);
            self.stack.push(next);
        } else {
            self.stack.pop();
        }

        Ok(Progress::Visited(current))
    }

    fn is_exhausted(&self) -> bool {
        self.finished
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Generator(GeneratorKind::RecursiveBacktracker)
    }
}

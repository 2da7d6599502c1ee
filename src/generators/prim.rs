use log::debug;
use rand::Rng;

use super::{GeneratorKind, MazeRng};
use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::stepper::{Algorithm, Completion, Progress, StepError, Stepper};
use crate::utils::{self, FnvHashSet};

/// A wall that could be knocked down: from a node already in the maze to a neighbouring node.
type Candidate = (GridCoordinate, GridCoordinate);

/// Randomized Prim's algorithm.
///
/// Keep a frontier of candidate walls leading out of the maze. Each step removes a random
/// candidate; if the node on the far side is still outside the maze the wall is carved and that
/// node's own outward candidates join the frontier. Stale candidates are discarded without being
/// reported. The mazes branch a lot more and have shorter dead ends than the backtracker's.
#[derive(Debug)]
pub struct RandomizedPrim {
    frontier: Vec<Candidate>,
    visited: FnvHashSet<GridCoordinate>,
    rng: MazeRng,
    finished: bool,
}

impl RandomizedPrim {
    pub fn new(grid: &Grid, rng: MazeRng) -> RandomizedPrim {
        let start = grid.start();
        let mut prim = RandomizedPrim {
            frontier: vec![],
            visited: utils::fnv_hashset(grid.nodes_count().0),
            rng,
            finished: false,
        };
        prim.visited.insert(start);
        prim.add_candidates(grid, start);
        prim
    }

    fn add_candidates(&mut self, grid: &Grid, from: GridCoordinate) {
        for neighbour in grid.node_neighbours(from) {
            if !self.visited.contains(&neighbour) {
                self.frontier.push((from, neighbour));
            }
        }
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

impl Stepper for RandomizedPrim {
    fn advance(&mut self, grid: &mut Grid) -> Result<Progress, StepError> {
        if self.finished {
            return Err(StepError::AlreadyComplete);
        }

        while !self.frontier.is_empty() {
            // Uniform pick, so the order left behind by swap_remove does not matter.
            let index = self.rng.gen_range(0..self.frontier.len());
            let (from, to) = self.frontier.swap_remove(index);

            if self.visited.insert(to) {
                grid.carve_between(from, to)?;
                self.add_candidates(grid, to);
                return Ok(Progress::Visited(to));
            }
        }

        self.finished = true;
        debug!("prim carved {} walls", grid.carved_walls_count());
        Ok(Progress::Finished(Completion::MazeGenerated))
    }

    fn is_exhausted(&self) -> bool {
        self.finished
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Generator(GeneratorKind::Prim)
    }
}

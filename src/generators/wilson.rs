use log::{debug, trace};
use rand::seq::SliceRandom;

use super::{GeneratorKind, MazeRng};
use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::grid_iterators::NodeIter;
use crate::stepper::{Algorithm, Completion, Progress, StepError, Stepper};
use crate::utils::{self, FnvHashSet};

/// Wilson's loop-erased random walk.
///
/// One random node seeds the maze. From each node still outside the maze we random walk until
/// the walk touches the maze, cutting out any loop the moment the walk crosses its own trail.
/// The surviving trail is then carved into the maze one node per step.
///
/// Unlike the other generators this picks uniformly among all spanning trees, so the mazes are
/// free of any structural bias. Walks can take a long time to find a small initial maze; those
/// steps are not reported, only the carving of the trail is.
#[derive(Debug)]
pub struct Wilson {
    in_maze: FnvHashSet<GridCoordinate>,
    walk_starts: NodeIter,
    trail: Vec<GridCoordinate>,
    // Next trail index to carve.
    carved_upto: usize,
    rng: MazeRng,
    finished: bool,
}

impl Wilson {
    pub fn new(grid: &Grid, mut rng: MazeRng) -> Wilson {
        let nodes = grid.nodes().collect::<Vec<_>>();
        let mut in_maze = utils::fnv_hashset(nodes.len());
        if let Some(&seed) = nodes.choose(&mut rng) {
            in_maze.insert(seed);
        }

        Wilson {
            in_maze,
            walk_starts: grid.nodes(),
            trail: vec![],
            carved_upto: 0,
            rng,
            finished: false,
        }
    }

    /// Random walk from `start` until hitting the maze, erasing loops as they form.
    fn loop_erased_walk(&mut self, grid: &Grid, start: GridCoordinate) {
        self.trail.clear();
        self.trail.push(start);
        self.carved_upto = 0;

        let mut current = start;
        while !self.in_maze.contains(&current) {
            // A lone node has no neighbours, but it is then the seed and never walked from.
            let next = match grid.node_neighbours(current).choose(&mut self.rng) {
                Some(&next) => next,
                None => break,
            };

            if let Some(position) = self.trail.iter().position(|&on_trail| on_trail == next) {
                self.trail.truncate(position + 1);
            } else {
                self.trail.push(next);
            }
            current = next;
        }
        trace!("wilson walk from {} left a trail of {}", start, self.trail.len());
    }
}

impl Stepper for Wilson {
    fn advance(&mut self, grid: &mut Grid) -> Result<Progress, StepError> {
        if self.finished {
            return Err(StepError::AlreadyComplete);
        }

        loop {
            if self.carved_upto < self.trail.len() {
                let node = self.trail[self.carved_upto];
                if self.carved_upto > 0 {
                    grid.carve_between(self.trail[self.carved_upto - 1], node)?;
                }
                self.in_maze.insert(node);
                self.carved_upto += 1;
                return Ok(Progress::Visited(node));
            }

            let in_maze = &self.in_maze;
            match self.walk_starts.find(|node| !in_maze.contains(node)) {
                Some(start) => self.loop_erased_walk(grid, start),
                None => {
                    self.finished = true;
                    debug!("wilson carved {} walls", grid.carved_walls_count());
                    return Ok(Progress::Finished(Completion::MazeGenerated));
                }
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.finished
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Generator(GeneratorKind::Wilson)
    }
}

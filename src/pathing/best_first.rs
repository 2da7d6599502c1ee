use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use super::{reconstruct_path, SolverKind};
use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::stepper::{Algorithm, Completion, Progress, StepError, Stepper};
use crate::utils::{self, FnvHashMap, FnvHashSet};

/// Lower bound on the remaining distance to the goal, used to order the search frontier.
pub trait Heuristic {
    fn estimate(&self, from: GridCoordinate, goal: GridCoordinate) -> usize;
    fn solver(&self) -> SolverKind;
}

/// Priority first, then the travelled distance, then the cell itself (row major), all ascending.
type QueueEntry = Reverse<(usize, usize, GridCoordinate)>;

/// Uniform-cost best first search over the passage graph, steered by a heuristic.
///
/// Every move costs 1. Shorter tentative distances replace longer ones on relaxation and the
/// cell is pushed again; entries for cells that were already finalized are skipped when popped.
/// The search stops as soon as End is popped.
pub struct BestFirst<H: Heuristic> {
    heuristic: H,
    start: GridCoordinate,
    end: GridCoordinate,
    queue: BinaryHeap<QueueEntry>,
    distances: FnvHashMap<GridCoordinate, usize>,
    predecessors: FnvHashMap<GridCoordinate, GridCoordinate>,
    finalized: FnvHashSet<GridCoordinate>,
    reached_end: bool,
    finished: bool,
}

impl<H: Heuristic> BestFirst<H> {
    pub fn with_heuristic(grid: &Grid, heuristic: H) -> BestFirst<H> {
        let (start, end) = (grid.start(), grid.end());
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start, 0);
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((heuristic.estimate(start, end), 0, start)));

        BestFirst {
            heuristic,
            start,
            end,
            queue,
            distances,
            predecessors: utils::fnv_hashmap(grid.size()),
            finalized: utils::fnv_hashset(grid.size()),
            reached_end: false,
            finished: false,
        }
    }

    /// Links from each reached cell back towards Start.
    pub fn predecessors(&self) -> &FnvHashMap<GridCoordinate, GridCoordinate> {
        &self.predecessors
    }

    /// Cells popped and expanded so far.
    pub fn finalized(&self) -> &FnvHashSet<GridCoordinate> {
        &self.finalized
    }

    pub fn distance_to(&self, coord: GridCoordinate) -> Option<usize> {
        self.distances.get(&coord).cloned()
    }

    fn relax_neighbours(&mut self, grid: &Grid, cell: GridCoordinate, distance: usize) {
        let tentative = distance + 1;
        for neighbour in grid.neighbours4(cell) {
            let improves = self.distances
                .get(&neighbour)
                .map_or(true, |&known| tentative < known);
            if improves {
                self.distances.insert(neighbour, tentative);
                self.predecessors.insert(neighbour, cell);
                let priority = tentative + self.heuristic.estimate(neighbour, self.end);
                self.queue.push(Reverse((priority, tentative, neighbour)));
            }
        }
    }

    fn finish(&mut self) -> Progress {
        self.finished = true;
        let completion = if self.reached_end {
            reconstruct_path(&self.predecessors, self.start, self.end)
                .map_or(Completion::NoPath, Completion::PathFound)
        } else {
            Completion::NoPath
        };
        debug!("{} finalized {} cells: {}",
               self.heuristic.solver(),
               self.finalized.len(),
               completion.status());
        Progress::Finished(completion)
    }
}

impl<H: Heuristic> Stepper for BestFirst<H> {
    fn advance(&mut self, grid: &mut Grid) -> Result<Progress, StepError> {
        if self.finished {
            return Err(StepError::AlreadyComplete);
        }
        if self.reached_end {
            return Ok(self.finish());
        }

        while let Some(Reverse((_, distance, cell))) = self.queue.pop() {
            if !self.finalized.insert(cell) {
                continue;
            }

            if cell == self.end {
                self.reached_end = true;
            } else {
                self.relax_neighbours(grid, cell, distance);
            }
            return Ok(Progress::Visited(cell));
        }

        Ok(self.finish())
    }

    fn is_exhausted(&self) -> bool {
        self.finished
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Solver(self.heuristic.solver())
    }
}

impl<H: Heuristic> fmt::Debug for BestFirst<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "BestFirst :: solver: {}, queued: {}, finalized: {}, reached_end: {}",
               self.heuristic.solver(),
               self.queue.len(),
               self.finalized.len(),
               self.reached_end)
    }
}

use super::best_first::{BestFirst, Heuristic};
use super::SolverKind;
use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::utils;

/// Manhattan distance to the goal. Admissible and consistent with unit moves on a 4-connected
/// grid, so the first time End is popped its path is a shortest one.
#[derive(Debug, Copy, Clone, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: GridCoordinate, goal: GridCoordinate) -> usize {
        utils::manhattan_distance(from, goal)
    }

    fn solver(&self) -> SolverKind {
        SolverKind::AStar
    }
}

/// A* search. Ties on `distance + estimate` go to the cell with the shorter distance travelled.
pub type AStar = BestFirst<Manhattan>;

impl BestFirst<Manhattan> {
    pub fn new(grid: &Grid) -> AStar {
        BestFirst::with_heuristic(grid, Manhattan)
    }
}

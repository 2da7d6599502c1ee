//! Path finding over a carved grid.
//!
//! The searches walk the 4-connected passage graph (every passage cell is a vertex, not just the
//! nodes) from Start to End, reporting each cell as it is examined. They never carve.

pub mod astar;
pub mod best_first;
pub mod dijkstra;
pub mod wall_follower;

use std::fmt;
use std::str::FromStr;

use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::stepper::Stepper;
use crate::utils::FnvHashMap;

pub use self::astar::AStar;
pub use self::dijkstra::Dijkstra;
pub use self::wall_follower::WallFollower;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum SolverKind {
    WallFollower,
    Dijkstra,
    AStar,
}

impl SolverKind {
    pub const ALL: [SolverKind; 3] = [SolverKind::WallFollower,
                                      SolverKind::Dijkstra,
                                      SolverKind::AStar];

    /// A fresh search from the grid's Start to its End.
    pub fn stepper(self, grid: &Grid) -> Box<dyn Stepper> {
        match self {
            SolverKind::WallFollower => Box::new(WallFollower::new(grid)),
            SolverKind::Dijkstra => Box::new(Dijkstra::new(grid)),
            SolverKind::AStar => Box::new(AStar::new(grid)),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            SolverKind::WallFollower => "Wall Follower",
            SolverKind::Dijkstra => "Dijkstra",
            SolverKind::AStar => "A*",
        };
        write!(f, "{}", name)
    }
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct UnknownSolver(pub String);

impl fmt::Display for UnknownSolver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "unknown path finder '{}', expected wall-follower, dijkstra or astar",
               self.0)
    }
}

impl std::error::Error for UnknownSolver {}

impl FromStr for SolverKind {
    type Err = UnknownSolver;

    fn from_str(s: &str) -> Result<SolverKind, UnknownSolver> {
        match s.to_ascii_lowercase().as_str() {
            "wall-follower" | "wallfollower" | "wall" => Ok(SolverKind::WallFollower),
            "dijkstra" => Ok(SolverKind::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(SolverKind::AStar),
            _ => Err(UnknownSolver(s.to_string())),
        }
    }
}

/// Follow predecessor links back from `end` to `start`, returning the path Start to End.
///
/// None if `end` was never reached, or if the links do not lead back to `start` (including
/// looping links, which are cut off once the walk is longer than there are links).
pub fn reconstruct_path(predecessors: &FnvHashMap<GridCoordinate, GridCoordinate>,
                        start: GridCoordinate,
                        end: GridCoordinate)
                        -> Option<Vec<GridCoordinate>> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        current = *predecessors.get(&current)?;
        path.push(current);
        if path.len() > predecessors.len() + 1 {
            return None;
        }
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::generators::GeneratorKind;
    use crate::stepper::{run_to_completion, Completion};
    use crate::units::{ColumnsCount, RowsCount};
    use crate::utils::{fnv_hashmap, FnvHashSet};

    fn gc(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate::new(row, col)
    }

    fn maze(kind: GeneratorKind, rows: usize, columns: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(RowsCount(rows), ColumnsCount(columns)).expect("valid grid");
        let mut generator = kind.stepper(&grid, seed);
        run_to_completion(generator.as_mut(), &mut grid).expect("generation failed");
        grid
    }

    fn solve(kind: SolverKind, grid: &Grid) -> (Vec<GridCoordinate>, Completion) {
        let mut working = grid.clone();
        let mut solver = kind.stepper(grid);
        let result = run_to_completion(solver.as_mut(), &mut working).expect("solve failed");
        assert_eq!(&working, grid, "{} modified the grid", kind);
        result
    }

    fn found_path(kind: SolverKind, grid: &Grid) -> Vec<GridCoordinate> {
        match solve(kind, grid).1 {
            Completion::PathFound(path) => path,
            other => panic!("{} finished with {:?}", kind, other),
        }
    }

    fn is_valid_path(grid: &Grid, path: &[GridCoordinate]) -> bool {
        path.first() == Some(&grid.start()) && path.last() == Some(&grid.end()) &&
        path.iter().all(|&c| grid.is_passage(c)) &&
        path.windows(2).all(|pair| grid.neighbours4(pair[0]).any(|n| n == pair[1]))
    }

    #[test]
    fn all_solvers_agree_on_tree_mazes() {
        for &generator in &GeneratorKind::ALL {
            for seed in 0..5 {
                let grid = maze(generator, 21, 25, seed);
                let dijkstra = found_path(SolverKind::Dijkstra, &grid);
                assert!(is_valid_path(&grid, &dijkstra));
                assert_eq!(found_path(SolverKind::AStar, &grid), dijkstra);
                assert_eq!(found_path(SolverKind::WallFollower, &grid), dijkstra);
            }
        }
    }

    #[test]
    fn astar_examines_no_more_cells_than_dijkstra() {
        for seed in 0..10 {
            let grid = maze(GeneratorKind::Prim, 31, 41, seed);
            let (dijkstra_visits, _) = solve(SolverKind::Dijkstra, &grid);
            let (astar_visits, _) = solve(SolverKind::AStar, &grid);
            assert!(astar_visits.len() <= dijkstra_visits.len());

            let dijkstra_cells: FnvHashSet<GridCoordinate> = dijkstra_visits.into_iter().collect();
            assert!(astar_visits.iter().all(|c| dijkstra_cells.contains(c)));
        }
    }

    #[test]
    fn five_by_five_shortest_path_is_five_cells() {
        for seed in 0..20 {
            let grid = maze(GeneratorKind::RecursiveBacktracker, 5, 5, seed);
            let path = found_path(SolverKind::Dijkstra, &grid);
            assert_eq!(path.len(), 5);
            assert_eq!(path.first(), Some(&gc(1, 1)));
            assert_eq!(path.last(), Some(&gc(3, 3)));
        }
    }

    #[test]
    fn quickcheck_solvers_agree() {
        fn prop(seed: u64, half_rows: u8, half_columns: u8) -> TestResult {
            let rows = (half_rows % 10) as usize * 2 + 3;
            let columns = (half_columns % 10) as usize * 2 + 3;
            let grid = maze(GeneratorKind::Wilson, rows, columns, seed);
            let dijkstra = found_path(SolverKind::Dijkstra, &grid);
            TestResult::from_bool(is_valid_path(&grid, &dijkstra) &&
                                  found_path(SolverKind::AStar, &grid) == dijkstra &&
                                  found_path(SolverKind::WallFollower, &grid) == dijkstra)
        }
        quickcheck(prop as fn(u64, u8, u8) -> TestResult);
    }

    #[test]
    fn unreachable_end_is_no_path() {
        let grid = Grid::new(RowsCount(7), ColumnsCount(7)).expect("valid grid");
        for &kind in &SolverKind::ALL {
            assert_eq!(solve(kind, &grid).1, Completion::NoPath, "{}", kind);
        }
    }

    #[test]
    fn reconstruct_walks_back_to_start() {
        let mut predecessors = fnv_hashmap(4);
        predecessors.insert(gc(1, 2), gc(1, 1));
        predecessors.insert(gc(1, 3), gc(1, 2));
        assert_eq!(reconstruct_path(&predecessors, gc(1, 1), gc(1, 3)),
                   Some(vec![gc(1, 1), gc(1, 2), gc(1, 3)]));
        assert_eq!(reconstruct_path(&predecessors, gc(1, 1), gc(1, 1)), Some(vec![gc(1, 1)]));
        assert_eq!(reconstruct_path(&predecessors, gc(1, 1), gc(3, 3)), None);
    }

    #[test]
    fn reconstruct_rejects_looping_links() {
        let mut predecessors = fnv_hashmap(2);
        predecessors.insert(gc(1, 2), gc(1, 3));
        predecessors.insert(gc(1, 3), gc(1, 2));
        assert_eq!(reconstruct_path(&predecessors, gc(1, 1), gc(1, 3)), None);
    }

    #[test]
    fn parse_solver_names() {
        assert_eq!("a*".parse::<SolverKind>(), Ok(SolverKind::AStar));
        assert_eq!("Dijkstra".parse::<SolverKind>(), Ok(SolverKind::Dijkstra));
        assert_eq!("wall-follower".parse::<SolverKind>(), Ok(SolverKind::WallFollower));
        assert!("bfs".parse::<SolverKind>().is_err());
        assert_eq!(SolverKind::AStar.to_string(), "A*");
    }
}

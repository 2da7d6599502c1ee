use super::best_first::{BestFirst, Heuristic};
use super::SolverKind;
use crate::cells::GridCoordinate;
use crate::grid::Grid;

/// No estimate at all: the frontier is ordered purely by distance travelled.
#[derive(Debug, Copy, Clone, Default)]
pub struct Uniform;

impl Heuristic for Uniform {
    #[inline]
    fn estimate(&self, _: GridCoordinate, _: GridCoordinate) -> usize {
        0
    }

    fn solver(&self) -> SolverKind {
        SolverKind::Dijkstra
    }
}

/// Dijkstra's shortest path search with lazy deletion of stale queue entries.
pub type Dijkstra = BestFirst<Uniform>;

impl BestFirst<Uniform> {
    pub fn new(grid: &Grid) -> Dijkstra {
        BestFirst::with_heuristic(grid, Uniform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorKind;
    use crate::stepper::{run_to_completion, Completion, Progress, StepError, Stepper};
    use crate::units::{ColumnsCount, RowsCount};
    use crate::utils::FnvHashSet;

    fn maze(rows: usize, columns: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(RowsCount(rows), ColumnsCount(columns)).expect("valid grid");
        let mut generator = GeneratorKind::RecursiveBacktracker.stepper(&grid, seed);
        run_to_completion(generator.as_mut(), &mut grid).expect("generation failed");
        grid
    }

    #[test]
    fn predecessors_lead_back_to_start_without_cycles() {
        let mut grid = maze(25, 35, 6);
        let mut dijkstra = Dijkstra::new(&grid);
        run_to_completion(&mut dijkstra, &mut grid).expect("solve failed");

        let mut seen: FnvHashSet<GridCoordinate> = FnvHashSet::default();
        let mut current = grid.end();
        while current != grid.start() {
            assert!(seen.insert(current), "cycle through {}", current);
            current = dijkstra.predecessors()[&current];
        }
        assert!(!dijkstra.predecessors().contains_key(&grid.start()));
    }

    #[test]
    fn path_length_matches_end_distance() {
        let mut grid = maze(15, 21, 12);
        let mut dijkstra = Dijkstra::new(&grid);
        let (visits, completion) = run_to_completion(&mut dijkstra, &mut grid)
            .expect("solve failed");

        let path = completion.path().expect("path through a tree maze").to_vec();
        assert_eq!(dijkstra.distance_to(grid.end()), Some(path.len() - 1));
        assert_eq!(visits.first(), Some(&grid.start()));
        assert_eq!(visits.last(), Some(&grid.end()));
    }

    #[test]
    fn every_cell_is_examined_at_most_once() {
        let mut grid = maze(21, 21, 30);
        let mut dijkstra = Dijkstra::new(&grid);
        let (visits, _) = run_to_completion(&mut dijkstra, &mut grid).expect("solve failed");
        let unique: FnvHashSet<GridCoordinate> = visits.iter().cloned().collect();
        assert_eq!(unique.len(), visits.len());
        assert_eq!(dijkstra.finalized().len(), visits.len());
    }

    #[test]
    fn stops_once_end_is_popped() {
        // A single open corridor along the top row: Start at (1,1), End at (1,5).
        let mut grid = Grid::new(RowsCount(3), ColumnsCount(7)).expect("valid grid");
        grid.carve_between(GridCoordinate::new(1, 1), GridCoordinate::new(1, 3))
            .expect("carve failed");
        grid.carve_between(GridCoordinate::new(1, 3), GridCoordinate::new(1, 5))
            .expect("carve failed");

        let mut dijkstra = Dijkstra::new(&grid);
        for col in 1..6 {
            assert_eq!(dijkstra.advance(&mut grid),
                       Ok(Progress::Visited(GridCoordinate::new(1, col))));
        }
        match dijkstra.advance(&mut grid) {
            Ok(Progress::Finished(Completion::PathFound(path))) => assert_eq!(path.len(), 5),
            other => panic!("expected a path, got {:?}", other),
        }
        assert_eq!(dijkstra.advance(&mut grid), Err(StepError::AlreadyComplete));
    }

    #[test]
    fn isolated_start_is_examined_then_no_path() {
        let mut grid = Grid::new(RowsCount(5), ColumnsCount(5)).expect("valid grid");
        let mut dijkstra = Dijkstra::new(&grid);
        assert_eq!(dijkstra.advance(&mut grid), Ok(Progress::Visited(grid.start())));
        assert_eq!(dijkstra.advance(&mut grid), Ok(Progress::Finished(Completion::NoPath)));
        assert!(dijkstra.is_exhausted());
    }
}

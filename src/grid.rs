use bit_set::BitSet;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid_iterators::{NodeIter, PassageNeighbours};
use crate::units::{ColumnsCount, NodesCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellKind {
    Wall,
    Passage,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridError {
    /// Rows and columns must both be odd and at least 3.
    InvalidDimensions { rows: usize, columns: usize },
    InvalidGridCoordinate(GridCoordinate),
    NotAdjacentNodes(GridCoordinate, GridCoordinate),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridError::InvalidDimensions { rows, columns } => {
                write!(f,
                       "grid dimensions {}x{} must both be odd and at least 3",
                       rows,
                       columns)
            }
            GridError::InvalidGridCoordinate(coord) => {
                write!(f, "coordinate {} is outside the grid", coord)
            }
            GridError::NotAdjacentNodes(a, b) => {
                write!(f, "{} and {} are not adjacent maze nodes", a, b)
            }
        }
    }
}

impl Error for GridError {}

/// Rectangular wall/passage grid.
///
/// Cells with both coordinates odd are the maze graph *nodes*, every other cell is a wall
/// sitting between nodes (or on the outer boundary). Carving the wall cell between two nodes
/// two cells apart links them.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: RowsCount,
    columns: ColumnsCount,
    // A set bit is a passage, everything else is wall.
    passages: BitSet,
}

impl Grid {
    /// Creates a grid in the maze-reset state: all walls except the nodes.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid, GridError> {
        validate_dimensions(rows, columns)?;

        let mut grid = Grid {
            rows,
            columns,
            passages: BitSet::with_capacity(rows.0 * columns.0),
        };
        grid.reset();
        Ok(grid)
    }

    /// Wall up everything again, leaving only the nodes open.
    pub fn reset(&mut self) {
        self.passages.clear();
        let columns = self.columns.0;
        for node in self.nodes() {
            self.passages.insert(node.row * columns + node.col);
        }
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    /// The fixed top left node where mazes are grown from and searches begin.
    #[inline]
    pub fn start(&self) -> GridCoordinate {
        GridCoordinate::new(1, 1)
    }

    /// The fixed bottom right node searches aim for.
    #[inline]
    pub fn end(&self) -> GridCoordinate {
        GridCoordinate::new(self.rows.0 - 2, self.columns.0 - 2)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows.0 && coord.col < self.columns.0
    }

    /// Is the coordinate on the grid and a node of the maze graph (odd row and column)?
    #[inline]
    pub fn is_node(&self, coord: GridCoordinate) -> bool {
        self.is_valid_coordinate(coord) && coord.is_node()
    }

    /// Convert a grid coordinate to a one dimensional row major index.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.col)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_grid_coordinate(&self, index: usize) -> GridCoordinate {
        GridCoordinate::new(index / self.columns.0, index % self.columns.0)
    }

    /// Bounds checked cell lookup.
    pub fn cell(&self, coord: GridCoordinate) -> Option<CellKind> {
        self.grid_coordinate_to_index(coord).map(|index| {
            if self.passages.contains(index) {
                CellKind::Passage
            } else {
                CellKind::Wall
            }
        })
    }

    /// Open passage? Anything outside the grid counts as wall.
    #[inline]
    pub fn is_passage(&self, coord: GridCoordinate) -> bool {
        self.cell(coord) == Some(CellKind::Passage)
    }

    /// Mark a cell as passage. Carving an existing passage is a no-op.
    pub fn carve(&mut self, coord: GridCoordinate) -> Result<(), GridError> {
        let index = self.grid_coordinate_to_index(coord)
            .ok_or(GridError::InvalidGridCoordinate(coord))?;
        self.passages.insert(index);
        Ok(())
    }

    /// Link two graph-adjacent nodes by carving the wall cell between them.
    pub fn carve_between(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<(), GridError> {
        if !self.is_node(a) || !self.is_node(b) || !are_graph_adjacent(a, b) {
            return Err(GridError::NotAdjacentNodes(a, b));
        }
        self.carve(a.midpoint(b))
    }

    /// Nodes two cells away in each direction that lie inside the grid, in the fixed
    /// (down, right, up, left) order.
    pub fn node_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| coord.offset(*dir, 2))
            .filter(|neighbour| self.is_node(*neighbour))
            .collect()
    }

    /// Orthogonally adjacent passage cells, lazily, in the fixed (down, right, up, left) order.
    #[inline]
    pub fn neighbours4(&self, coord: GridCoordinate) -> PassageNeighbours {
        PassageNeighbours::new(self, coord)
    }

    #[inline]
    pub fn nodes(&self) -> NodeIter {
        NodeIter::new(self.rows, self.columns)
    }

    #[inline]
    pub fn nodes_count(&self) -> NodesCount {
        NodesCount(((self.rows.0 - 1) / 2) * ((self.columns.0 - 1) / 2))
    }

    /// Carved cells that are not nodes, i.e. the links of the maze graph.
    pub fn carved_walls<'a>(&'a self) -> impl Iterator<Item = GridCoordinate> + 'a {
        self.passages
            .iter()
            .map(move |index| self.index_to_grid_coordinate(index))
            .filter(|coord| !coord.is_node())
    }

    pub fn carved_walls_count(&self) -> usize {
        self.carved_walls().count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows.0 {
            let line: String = (0..self.columns.0)
                .map(|col| {
                    if self.is_passage(GridCoordinate::new(row, col)) {
                        ' '
                    } else {
                        '#'
                    }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub fn validate_dimensions(rows: RowsCount, columns: ColumnsCount) -> Result<(), GridError> {
    let valid = |n: usize| n >= 3 && n % 2 == 1;
    if valid(rows.0) && valid(columns.0) {
        Ok(())
    } else {
        Err(GridError::InvalidDimensions {
            rows: rows.0,
            columns: columns.0,
        })
    }
}

fn are_graph_adjacent(a: GridCoordinate, b: GridCoordinate) -> bool {
    let row_gap = (a.row as isize - b.row as isize).abs();
    let col_gap = (a.col as isize - b.col as isize).abs();
    (row_gap == 2 && col_gap == 0) || (row_gap == 0 && col_gap == 2)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new(RowsCount(rows), ColumnsCount(columns)).expect("valid grid dimensions")
    }

    fn gc(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate::new(row, col)
    }

    #[test]
    fn rejects_even_or_tiny_dimensions() {
        for &(r, c) in &[(4, 5), (5, 4), (1, 5), (5, 1), (0, 0), (2, 2)] {
            assert_eq!(Grid::new(RowsCount(r), ColumnsCount(c)),
                       Err(GridError::InvalidDimensions { rows: r, columns: c }));
        }
        assert!(Grid::new(RowsCount(3), ColumnsCount(3)).is_ok());
    }

    #[test]
    fn fresh_grid_has_only_nodes_open() {
        let g = grid(5, 7);
        for row in 0..5 {
            for col in 0..7 {
                let coord = gc(row, col);
                assert_eq!(g.is_passage(coord), coord.is_node(), "cell {}", coord);
            }
        }
        assert_eq!(g.nodes_count(), NodesCount(6));
        assert_eq!(g.carved_walls_count(), 0);
    }

    #[test]
    fn start_and_end_are_nodes() {
        let g = grid(61, 81);
        assert_eq!(g.start(), gc(1, 1));
        assert_eq!(g.end(), gc(59, 79));
        assert!(g.is_node(g.start()));
        assert!(g.is_node(g.end()));
    }

    #[test]
    fn out_of_range_cells_are_walls() {
        let g = grid(3, 3);
        assert_eq!(g.cell(gc(3, 0)), None);
        assert_eq!(g.cell(gc(0, 3)), None);
        assert!(!g.is_passage(gc(10, 10)));
    }

    #[test]
    fn carving_is_idempotent() {
        let mut g = grid(5, 5);
        g.carve(gc(1, 2)).expect("carve failed");
        let once = g.clone();
        g.carve(gc(1, 2)).expect("carve failed");
        assert_eq!(g, once);
        assert!(g.is_passage(gc(1, 2)));
        assert_eq!(g.carved_walls_count(), 1);
    }

    #[test]
    fn carve_outside_grid_is_an_error() {
        let mut g = grid(5, 5);
        assert_eq!(g.carve(gc(5, 1)), Err(GridError::InvalidGridCoordinate(gc(5, 1))));
    }

    #[test]
    fn carve_between_requires_adjacent_nodes() {
        let mut g = grid(5, 5);
        assert!(g.carve_between(gc(1, 1), gc(1, 3)).is_ok());
        assert!(g.is_passage(gc(1, 2)));
        assert_eq!(g.carve_between(gc(1, 1), gc(3, 3)),
                   Err(GridError::NotAdjacentNodes(gc(1, 1), gc(3, 3))));
        assert_eq!(g.carve_between(gc(1, 1), gc(1, 2)),
                   Err(GridError::NotAdjacentNodes(gc(1, 1), gc(1, 2))));
    }

    #[test]
    fn reset_walls_everything_back_up() {
        let mut g = grid(5, 5);
        g.carve_between(gc(1, 1), gc(3, 1)).expect("carve failed");
        g.reset();
        assert_eq!(g, grid(5, 5));
    }

    #[test]
    fn node_neighbours_stay_inside_the_grid() {
        let g = grid(7, 7);
        assert_eq!(&*g.node_neighbours(gc(1, 1)), &[gc(3, 1), gc(1, 3)]);
        assert_eq!(&*g.node_neighbours(gc(3, 3)), &[gc(5, 3), gc(3, 5), gc(1, 3), gc(3, 1)]);
        assert_eq!(&*g.node_neighbours(gc(5, 5)), &[gc(3, 5), gc(5, 3)]);
    }

    #[test]
    fn neighbours4_only_yields_passages_in_fixed_order() {
        let mut g = grid(5, 5);
        assert_eq!(g.neighbours4(gc(1, 1)).count(), 0);

        g.carve(gc(1, 2)).expect("carve failed");
        g.carve(gc(2, 1)).expect("carve failed");
        assert_eq!(g.neighbours4(gc(1, 1)).collect::<Vec<_>>(), vec![gc(2, 1), gc(1, 2)]);

        g.carve(gc(1, 0)).expect("carve failed");
        g.carve(gc(0, 1)).expect("carve failed");
        assert_eq!(g.neighbours4(gc(1, 1)).collect::<Vec<_>>(),
                   vec![gc(2, 1), gc(1, 2), gc(0, 1), gc(1, 0)]);
    }

    #[test]
    fn neighbours4_at_the_grid_edge() {
        let mut g = grid(3, 3);
        g.carve(gc(0, 0)).expect("carve failed");
        g.carve(gc(1, 0)).expect("carve failed");
        assert_eq!(g.neighbours4(gc(0, 0)).collect::<Vec<_>>(), vec![gc(1, 0)]);
    }

    #[test]
    fn carved_walls_skips_nodes() {
        let mut g = grid(5, 5);
        g.carve_between(gc(1, 1), gc(1, 3)).expect("carve failed");
        g.carve_between(gc(3, 3), gc(1, 3)).expect("carve failed");
        assert_eq!(g.carved_walls().sorted().collect::<Vec<_>>(), vec![gc(1, 2), gc(2, 3)]);
    }

    #[test]
    fn display_draws_walls_and_passages() {
        let mut g = grid(3, 5);
        g.carve_between(gc(1, 1), gc(1, 3)).expect("carve failed");
        assert_eq!(format!("{}", g), "#####\n#   #\n#####\n");
    }
}

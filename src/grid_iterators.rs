use std::fmt;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

/// Row major iteration over every node (odd row, odd column) of a grid.
#[derive(Debug, Copy, Clone)]
pub struct NodeIter {
    rows: usize,
    columns: usize,
    next_node: GridCoordinate,
}

impl NodeIter {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> NodeIter {
        NodeIter {
            rows: rows.0,
            columns: columns.0,
            next_node: GridCoordinate::new(1, 1),
        }
    }

    fn remaining(&self) -> usize {
        let GridCoordinate { row, col } = self.next_node;
        if row + 1 >= self.rows || self.columns < 3 {
            return 0;
        }
        let nodes_per_row = (self.columns - 1) / 2;
        let rows_after_this = (self.rows - 1 - row) / 2;
        let left_in_this_row = nodes_per_row - (col - 1) / 2;
        left_in_this_row + rows_after_this * nodes_per_row
    }
}

impl Iterator for NodeIter {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let node = self.next_node;
        self.next_node = if node.col + 3 < self.columns {
            GridCoordinate::new(node.row, node.col + 2)
        } else {
            GridCoordinate::new(node.row + 2, 1)
        };
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NodeIter {} // default impl using size_hint()

/// Lazily yields the passage cells orthogonally adjacent to a cell.
///
/// Directions are tried in down, right, up, left order. Not restartable; ask the grid for a
/// new one each time.
#[derive(Clone)]
pub struct PassageNeighbours<'a> {
    grid: &'a Grid,
    origin: GridCoordinate,
    next_direction: usize,
}

impl<'a> PassageNeighbours<'a> {
    pub fn new(grid: &'a Grid, origin: GridCoordinate) -> PassageNeighbours<'a> {
        PassageNeighbours {
            grid,
            origin,
            next_direction: 0,
        }
    }
}

impl<'a> Iterator for PassageNeighbours<'a> {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_direction < CompassPrimary::ALL.len() {
            let dir = CompassPrimary::ALL[self.next_direction];
            self.next_direction += 1;

            if let Some(neighbour) = self.origin.offset(dir, 1) {
                if self.grid.is_passage(neighbour) {
                    return Some(neighbour);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CompassPrimary::ALL.len() - self.next_direction))
    }
}

impl<'a> fmt::Debug for PassageNeighbours<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "PassageNeighbours :: origin: {:?}, next_direction: {:?}",
               self.origin,
               self.next_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_iter_is_row_major() {
        let nodes: Vec<GridCoordinate> = NodeIter::new(RowsCount(5), ColumnsCount(7)).collect();
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(nodes, vec![gc(1, 1), gc(1, 3), gc(1, 5), gc(3, 1), gc(3, 3), gc(3, 5)]);
    }

    #[test]
    fn node_iter_exact_size() {
        let mut iter = NodeIter::new(RowsCount(61), ColumnsCount(81));
        assert_eq!(iter.len(), 30 * 40);
        iter.next();
        assert_eq!(iter.len(), 30 * 40 - 1);
        assert_eq!(iter.count(), 30 * 40 - 1);
    }

    #[test]
    fn smallest_grid_has_one_node() {
        let nodes: Vec<GridCoordinate> = NodeIter::new(RowsCount(3), ColumnsCount(3)).collect();
        assert_eq!(nodes, vec![GridCoordinate::new(1, 1)]);
    }

    #[test]
    fn passage_neighbours_is_exhausted_after_one_pass() {
        let mut g = Grid::new(RowsCount(3), ColumnsCount(3)).expect("valid grid");
        g.carve(GridCoordinate::new(1, 2)).expect("carve failed");
        let mut neighbours = g.neighbours4(GridCoordinate::new(1, 1));
        assert_eq!(neighbours.next(), Some(GridCoordinate::new(1, 2)));
        assert_eq!(neighbours.next(), None);
        assert_eq!(neighbours.next(), None);
    }
}

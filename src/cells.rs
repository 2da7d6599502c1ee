use std::fmt;

/// A cell position on the grid.
///
/// Ordering is row major (row first, then column), which is the tie-breaking order the
/// priority queue based path finders fall back on.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    /// Both coordinates odd - a vertex of the maze graph.
    #[inline]
    pub fn is_node(&self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// Creates a new coordinate `distance` cells away in the given direction.
    /// Returns None if that would step below row or column zero.
    pub fn offset(&self, dir: CompassPrimary, distance: usize) -> Option<GridCoordinate> {
        let (row, col) = (self.row, self.col);
        match dir {
            CompassPrimary::South => row.checked_add(distance).map(|r| GridCoordinate::new(r, col)),
            CompassPrimary::East => col.checked_add(distance).map(|c| GridCoordinate::new(row, c)),
            CompassPrimary::North => row.checked_sub(distance).map(|r| GridCoordinate::new(r, col)),
            CompassPrimary::West => col.checked_sub(distance).map(|c| GridCoordinate::new(row, c)),
        }
    }

    /// The cell half way between two coordinates - the wall between two graph-adjacent nodes.
    #[inline]
    pub fn midpoint(&self, other: GridCoordinate) -> GridCoordinate {
        GridCoordinate::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// Neighbour enumeration order used everywhere: down, right, up, left.
    /// Searches depend on this for reproducible tie-breaking.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::North,
                                          CompassPrimary::West];
}

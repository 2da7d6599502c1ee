use itertools::Itertools;
use std::fmt;

use crate::cells::GridCoordinate;
use crate::grid::{CellKind, Grid};
use crate::session::Session;
use crate::utils::FnvHashSet;

pub const WALL: char = '#';
pub const PASSAGE: char = ' ';
pub const VISITED: char = '.';
pub const CURRENT: char = '@';
/// Path cells while a search is still reporting progress.
pub const PATH: char = '+';
/// Path cells once the maze is solved.
pub const SOLVED_PATH: char = '*';
pub const START: char = 'S';
pub const END: char = 'E';

/// One text frame of a session.
///
/// Layers are painted bottom up, later ones winning: walls and passages, Visited, the current
/// cell, the Path, then Start and End.
pub struct SessionDisplay<'a> {
    session: &'a Session,
    on_path: FnvHashSet<GridCoordinate>,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a Session) -> SessionDisplay<'a> {
        SessionDisplay {
            session,
            on_path: session.path().iter().cloned().collect(),
        }
    }

    fn glyph(&self, coord: GridCoordinate) -> char {
        let grid: &Grid = self.session.grid();
        if coord == grid.start() {
            START
        } else if coord == grid.end() {
            END
        } else if self.on_path.contains(&coord) {
            if self.session.is_solved() { SOLVED_PATH } else { PATH }
        } else if self.session.current() == Some(coord) {
            CURRENT
        } else if self.session.visited().contains(&coord) {
            VISITED
        } else {
            match grid.cell(coord) {
                Some(CellKind::Passage) => PASSAGE,
                _ => WALL,
            }
        }
    }
}

impl<'a> fmt::Display for SessionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let grid = self.session.grid();
        let lines = (0..grid.rows().0).map(|row| {
            (0..grid.columns().0)
                .map(|col| self.glyph(GridCoordinate::new(row, col)))
                .collect::<String>()
        });
        write!(f, "{}", lines.format("\n"))
    }
}

impl<'a> fmt::Debug for SessionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SessionDisplay :: path cells: {}", self.on_path.len())
    }
}

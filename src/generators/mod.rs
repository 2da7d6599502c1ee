//! Maze generation algorithms.
//!
//! All of them grow a spanning tree over the grid nodes: once a run completes every node is
//! reachable from Start and there are exactly `nodes - 1` carved walls, so there are no loops.

pub mod prim;
pub mod recursive_backtracker;
pub mod wilson;

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::fmt;
use std::str::FromStr;

use crate::grid::Grid;
use crate::stepper::Stepper;

pub use self::prim::RandomizedPrim;
pub use self::recursive_backtracker::RecursiveBacktracker;
pub use self::wilson::Wilson;

/// Randomness source of every generator. Seeded, so a given seed always carves the same maze.
pub type MazeRng = XorShiftRng;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum GeneratorKind {
    RecursiveBacktracker,
    Prim,
    Wilson,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 3] = [GeneratorKind::RecursiveBacktracker,
                                         GeneratorKind::Prim,
                                         GeneratorKind::Wilson];

    /// A fresh generator run over `grid`, which should be in the maze-reset state.
    pub fn stepper(self, grid: &Grid, seed: u64) -> Box<dyn Stepper> {
        let rng = MazeRng::seed_from_u64(seed);
        match self {
            GeneratorKind::RecursiveBacktracker => Box::new(RecursiveBacktracker::new(grid, rng)),
            GeneratorKind::Prim => Box::new(RandomizedPrim::new(grid, rng)),
            GeneratorKind::Wilson => Box::new(Wilson::new(grid, rng)),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            GeneratorKind::RecursiveBacktracker => "Recursive Backtracking",
            GeneratorKind::Prim => "Prim",
            GeneratorKind::Wilson => "Wilson",
        };
        write!(f, "{}", name)
    }
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct UnknownGenerator(pub String);

impl fmt::Display for UnknownGenerator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "unknown maze generator '{}', expected recursive-backtracker, prim or wilson",
               self.0)
    }
}

impl std::error::Error for UnknownGenerator {}

impl FromStr for GeneratorKind {
    type Err = UnknownGenerator;

    fn from_str(s: &str) -> Result<GeneratorKind, UnknownGenerator> {
        match s.to_ascii_lowercase().as_str() {
            "recursive-backtracker" | "recursive-backtracking" | "backtracker" | "dfs" => {
                Ok(GeneratorKind::RecursiveBacktracker)
            }
            "prim" | "prims" => Ok(GeneratorKind::Prim),
            "wilson" => Ok(GeneratorKind::Wilson),
            _ => Err(UnknownGenerator(s.to_string())),
        }
    }
}

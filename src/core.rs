//! Defines the core pluck-doku types.
//!
//! Among these are:
//!
//! - Grid: the 9x9 Sudoku board, and SolvedGrid, its fully-filled form
//! - Num: the 9 numerals that go in the grid's squares
//! - Loc: the 81 locations of the grid
//! - the unit types Row, Col and Blk identifying the groups of the grid

mod grid;
mod id_types;
mod loc;
mod num;
pub mod set;
mod units;

pub use grid::*;
pub use loc::*;
pub use num::*;
pub use units::*;

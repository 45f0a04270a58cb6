//! Defines types for the Sudoku "units": the regions of the grid that
//! must contain every numeral in a solution.

use super::loc::*;
use crate::define_id_types;
use paste::paste;
use seq_macro::seq;
use std::fmt;

define_id_types! {
    /// Identifies one of the 9 rows in a Sudoku grid.
    ///
    /// Rows are numbered top to bottom.
    #[derive(Debug)]
    Row: i8[9];

    /// Identifies one of the 9 columns in a Sudoku grid.
    ///
    /// Columns are numbered left to right.
    #[derive(Debug)]
    Col: i8[9];

    /// Identifies one of the 9 3x3 blocks in a Sudoku grid.
    ///
    /// Blocks are numbered in row-major order.
    #[derive(Debug)]
    Blk: i8[9];
}

// Constant unit values: R1 through R9 (rows, top to bottom); C1 through C9
// (columns, left to right); and B1 through B9 (blocks, top left going in
// row-major order).
seq!(N in 1..=9 {
    paste! {
        #[allow(clippy::eq_op)]
        pub const [<R N>]: Row = Row(N - 1);
        #[allow(clippy::eq_op)]
        pub const [<C N>]: Col = Col(N - 1);
        #[allow(clippy::eq_op)]
        pub const [<B N>]: Blk = Blk(N - 1);
    }
});

impl Row {
  /// The locations that make up this row.
  pub fn locs(self) -> LocSet {
    let mut locs = LocSet::new();
    for col in Col::all() {
      locs.insert(Loc::at(self, col));
    }
    locs
  }
}

impl Col {
  /// The locations that make up this column.
  pub fn locs(self) -> LocSet {
    let mut locs = LocSet::new();
    for row in Row::all() {
      locs.insert(Loc::at(row, self));
    }
    locs
  }
}

impl Blk {
  /// The block containing the intersection of the given row and column.
  pub const fn containing(row: Row, col: Col) -> Self {
    // Safe because rows and columns are in 0..9.
    unsafe { Blk::new_unchecked(row.get() / 3 * 3 + col.get() / 3) }
  }

  /// The locations that make up this block.
  pub fn locs(self) -> LocSet {
    let mut locs = LocSet::new();
    for loc in Loc::all() {
      if loc.blk() == self {
        locs.insert(loc);
      }
    }
    locs
  }
}

/// One of a row, column, or block.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unit {
  Row(Row),
  Col(Col),
  Blk(Blk),
}

impl Unit {
  /// Iterates all 27 units of the grid.
  pub fn all() -> impl Iterator<Item = Unit> {
    Row::all()
      .map(Unit::Row)
      .chain(Col::all().map(Unit::Col))
      .chain(Blk::all().map(Unit::Blk))
  }

  /// The locations that this unit comprises.
  pub fn locs(self) -> LocSet {
    match self {
      Self::Row(row) => row.locs(),
      Self::Col(col) => col.locs(),
      Self::Blk(blk) => blk.locs(),
    }
  }
}

impl fmt::Display for Row {
  /// Prints this row as Rn, where n is the ordinal number of the row.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "R{}", self.ordinal())
  }
}

impl fmt::Display for Col {
  /// Prints this column as Cn, where n is the ordinal number of the column.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "C{}", self.ordinal())
  }
}

impl fmt::Display for Blk {
  /// Prints this block as Bn, where n is the ordinal number of the block.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "B{}", self.ordinal())
  }
}
